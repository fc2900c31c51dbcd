//! Workbook reader - tracking sheet → issue rows

use crate::error::{TrackerError, TrackerResult};
use crate::types::{Issue, SHEET_NAME};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;
use tracing::{debug, info};

/// Load the issue table from a workbook.
///
/// Columns are mapped by header text, not position, so a manually
/// re-ordered sheet still reads correctly. Unknown headers are ignored and
/// missing ones come back empty. Falls back to the first worksheet when no
/// sheet is named `Issues`.
pub fn load_issues(path: &Path) -> TrackerResult<Vec<Issue>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| TrackerError::ExcelRead(format!("Failed to open workbook: {}", e)))?;

    let sheet_name = if workbook.sheet_names().iter().any(|n| n == SHEET_NAME) {
        SHEET_NAME.to_string()
    } else {
        workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| TrackerError::ExcelRead("Workbook has no worksheets".to_string()))?
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| TrackerError::ExcelRead(format!("Failed to read sheet: {}", e)))?;

    let (height, width) = range.get_size();
    if height == 0 {
        return Ok(Vec::new());
    }

    // Header row: cell text per column index.
    let mut headers: Vec<String> = Vec::with_capacity(width);
    for col in 0..width {
        let name = match range.get((0, col)) {
            Some(Data::String(s)) => s.clone(),
            Some(Data::Empty) | None => String::new(),
            Some(other) => other.to_string(),
        };
        headers.push(name);
    }

    let mut issues = Vec::new();
    for row in 1..height {
        let mut issue = Issue::default();
        let mut any_value = false;

        for (col, header) in headers.iter().enumerate() {
            let value = match range.get((row, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Empty) | None => String::new(),
                Some(other) => other.to_string(),
            };
            if !value.is_empty() {
                any_value = true;
            }
            if !issue.set_by_header(header, value) && row == 1 {
                debug!(%header, "ignoring unknown column");
            }
        }

        // Trailing blank rows come back from calamine as all-empty cells.
        if any_value {
            issues.push(issue);
        }
    }

    info!(path = %path.display(), rows = issues.len(), "workbook loaded");
    Ok(issues)
}

/// Like [`load_issues`], but a missing file yields an empty table so an
/// update can bootstrap a new workbook.
pub fn load_issues_or_empty(path: &Path) -> TrackerResult<Vec<Issue>> {
    if !path.exists() {
        info!(path = %path.display(), "workbook not found, starting empty");
        return Ok(Vec::new());
    }
    load_issues(path)
}
