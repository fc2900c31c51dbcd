//! Scraped-batch input: JSON arrays of issue records.

use crate::error::{TrackerError, TrackerResult};
use crate::types::Issue;
use std::fs;
use std::path::Path;

/// Parse a batch from JSON text. The batch must be a non-empty array of
/// records keyed by the sheet headers.
pub fn parse_batch(json: &str) -> TrackerResult<Vec<Issue>> {
    let issues: Vec<Issue> = serde_json::from_str(json)
        .map_err(|e| TrackerError::Batch(format!("Invalid batch JSON: {}", e)))?;

    if issues.is_empty() {
        return Err(TrackerError::Batch(
            "Batch contains no records".to_string(),
        ));
    }
    Ok(issues)
}

/// Read and parse a batch file.
pub fn load_batch(path: &Path) -> TrackerResult<Vec<Issue>> {
    let json = fs::read_to_string(path)
        .map_err(|e| TrackerError::Batch(format!("Failed to read {}: {}", path.display(), e)))?;
    parse_batch(&json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch() {
        let json = r#"[
            {"Title": "A", "Status": "OPEN"},
            {"Title": "B", "Status": "DONE", "Priority": "Low"}
        ]"#;
        let batch = parse_batch(json).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[1].priority, "Low");
    }

    #[test]
    fn test_empty_array_rejected() {
        assert!(parse_batch("[]").is_err());
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(parse_batch("{not json").is_err());
        assert!(parse_batch(r#"{"Title": "not an array"}"#).is_err());
    }

    #[test]
    fn test_load_batch_missing_file() {
        assert!(load_batch(Path::new("no_such_batch.json")).is_err());
    }
}
