//! Workbook writer - issue rows → formatted tracking sheet

use crate::error::{TrackerError, TrackerResult};
use crate::types::{status_fill, Issue, COLUMNS, SHEET_NAME};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;
use tracing::info;

const HEADER_FILL: u32 = 0x1F4E78;
const STATUS_COL: usize = 3;

const MIN_COL_WIDTH: f64 = 10.0;
const MAX_COL_WIDTH: f64 = 50.0;

/// Write the full issue table to `path`, replacing the file.
///
/// Header row gets the dark-blue fill with bold white centered text, every
/// cell a thin border, status cells their state color, and column widths
/// track the longest content (clamped to [10, 50]).
pub fn write_issues(path: &Path, issues: &[Issue]) -> TrackerResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| TrackerError::ExcelWrite(format!("Failed to set worksheet name: {}", e)))?;

    let header_format = Format::new()
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_bold()
        .set_font_color(Color::White)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new().set_border(FormatBorder::Thin);

    for (col_idx, col_name) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col_idx as u16, *col_name, &header_format)
            .map_err(|e| TrackerError::ExcelWrite(format!("Failed to write header: {}", e)))?;
    }

    for (row_idx, issue) in issues.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col_idx, value) in issue.row_values().iter().enumerate() {
            let format = if col_idx == STATUS_COL {
                match status_fill(value) {
                    Some(rgb) => Format::new()
                        .set_border(FormatBorder::Thin)
                        .set_background_color(Color::RGB(rgb)),
                    None => cell_format.clone(),
                }
            } else {
                cell_format.clone()
            };

            worksheet
                .write_string_with_format(row, col_idx as u16, *value, &format)
                .map_err(|e| TrackerError::ExcelWrite(format!("Failed to write cell: {}", e)))?;
        }
    }

    for (col_idx, width) in column_widths(issues).iter().enumerate() {
        worksheet
            .set_column_width(col_idx as u16, *width)
            .map_err(|e| TrackerError::ExcelWrite(format!("Failed to set column width: {}", e)))?;
    }

    workbook
        .save(path)
        .map_err(|e| TrackerError::ExcelWrite(format!("Failed to save workbook: {}", e)))?;

    info!(path = %path.display(), rows = issues.len(), "workbook written");
    Ok(())
}

/// Per-column widths: longest cell (header included) + 2, clamped.
fn column_widths(issues: &[Issue]) -> [f64; 10] {
    let mut widths = [0usize; 10];
    for (idx, header) in COLUMNS.iter().enumerate() {
        widths[idx] = header.chars().count();
    }
    for issue in issues {
        for (idx, value) in issue.row_values().iter().enumerate() {
            widths[idx] = widths[idx].max(value.chars().count());
        }
    }
    widths.map(|w| ((w + 2) as f64).clamp(MIN_COL_WIDTH, MAX_COL_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tracker.xlsx");

        let mut issue = Issue::with_title("Batch job stuck");
        issue.status = "IN PROGRESS".to_string();

        write_issues(&path, &[issue]).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_write_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.xlsx");

        write_issues(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let path = Path::new("/nonexistent/dir/tracker.xlsx");
        let result = write_issues(path, &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_column_widths_clamped() {
        let mut long = Issue::with_title("T".repeat(120));
        long.priority = "P1".to_string();

        let widths = column_widths(&[long]);
        // Title pinned at the maximum, short Priority at the minimum
        assert_eq!(widths[0], 50.0);
        assert_eq!(widths[2], 10.0);
    }

    #[test]
    fn test_column_widths_header_counts() {
        // "Last Updated" header is 12 chars, +2 padding
        let widths = column_widths(&[]);
        assert_eq!(widths[8], 14.0);
    }
}
