//! Issuetrack - Excel tracking workbook for scraped issue records
//!
//! This library maintains an .xlsx workbook of issue records: it reconciles
//! freshly scraped batches against the existing rows by title, appends new
//! issues, updates changed fields with a `Last Updated` stamp, re-applies
//! the sheet's cosmetic formatting, and exports to CSV.
//!
//! # Example
//!
//! ```no_run
//! use issuetrack::excel::{load_issues_or_empty, write_issues};
//! use issuetrack::reconcile::{reconcile, timestamp_now};
//! use issuetrack::types::Issue;
//! use std::path::Path;
//!
//! let path = Path::new("tracker.xlsx");
//! let mut issues = load_issues_or_empty(path)?;
//!
//! let batch = vec![Issue::with_title("Login fails after SSO redirect")];
//! let report = reconcile(&mut issues, &batch, &timestamp_now());
//! println!("{} new, {} updated", report.added, report.updated);
//!
//! write_issues(path, &issues)?;
//! # Ok::<(), issuetrack::error::TrackerError>(())
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod export;
pub mod reconcile;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{TrackerError, TrackerResult};
pub use reconcile::{FieldChange, ReconcileReport};
pub use stats::TrackerStats;
pub use types::{Issue, COLUMNS};
