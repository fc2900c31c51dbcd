//! CSV export of the tracking sheet.

use crate::error::{TrackerError, TrackerResult};
use crate::excel::load_issues;
use crate::types::{Issue, COLUMNS};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// UTF-8 byte order mark. Excel misreads accented text in a plain UTF-8
/// CSV, so the export leads with a BOM.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Default CSV path for a workbook: same location, `.csv` extension.
pub fn default_csv_path(workbook: &Path) -> PathBuf {
    workbook.with_extension("csv")
}

/// Export a workbook's issue table to CSV. Returns the path written.
pub fn export_csv(workbook: &Path, output: Option<&Path>) -> TrackerResult<PathBuf> {
    let issues = load_issues(workbook)?;
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_csv_path(workbook));

    write_csv(&output, &issues)?;
    info!(path = %output.display(), rows = issues.len(), "CSV exported");
    Ok(output)
}

fn write_csv(path: &Path, issues: &[Issue]) -> TrackerResult<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(COLUMNS)
        .map_err(|e| TrackerError::Csv(format!("Failed to write header: {}", e)))?;
    for issue in issues {
        writer
            .write_record(issue.row_values())
            .map_err(|e| TrackerError::Csv(format!("Failed to write row: {}", e)))?;
    }
    writer
        .flush()
        .map_err(|e| TrackerError::Csv(format!("Failed to flush CSV: {}", e)))?;
    Ok(())
}
