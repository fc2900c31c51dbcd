//! Title-keyed reconciliation of scraped batches against the tracking table.

use crate::types::{Issue, TRACKED_FIELDS};
use std::collections::HashMap;
use tracing::{debug, info};

/// One detected field change, kept for verbose output and logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub title: String,
    pub field: &'static str,
    pub old: String,
    pub new: String,
}

/// Outcome of a reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Rows appended for titles not present in the sheet.
    pub added: usize,
    /// Existing rows with at least one tracked field changed.
    pub updated: usize,
    /// Batch records whose tracked fields all matched.
    pub unchanged: usize,
    /// Batch records skipped for having an empty title.
    pub skipped: usize,
    /// Every individual field change, in batch order.
    pub changes: Vec<FieldChange>,
}

impl ReconcileReport {
    /// True when the pass left the table as it was.
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.updated == 0
    }
}

/// Current local time in the sheet's `Last Updated` format.
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Reconcile a scraped batch into the existing table, in place.
///
/// Matching is by exact title; on duplicate titles in the sheet the first
/// occurrence wins. New titles are appended with `Last Updated` set to
/// `now`; existing rows get each differing tracked field overwritten and
/// `Last Updated` restamped once. Comments are never touched by a batch.
pub fn reconcile(existing: &mut Vec<Issue>, batch: &[Issue], now: &str) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    // Title -> row index, first occurrence wins.
    let mut index: HashMap<String, usize> = HashMap::new();
    for (idx, issue) in existing.iter().enumerate() {
        if !issue.title.is_empty() && !index.contains_key(&issue.title) {
            index.insert(issue.title.clone(), idx);
        }
    }

    for record in batch {
        if record.title.is_empty() {
            debug!("skipping batch record with empty title");
            report.skipped += 1;
            continue;
        }

        match index.get(&record.title) {
            None => {
                let mut row = record.clone();
                row.last_updated = now.to_string();
                index.insert(row.title.clone(), existing.len());
                existing.push(row);
                report.added += 1;
                info!(title = %record.title, "new issue added");
            }
            Some(&idx) => {
                let row = &mut existing[idx];
                let mut row_changed = false;

                for field in TRACKED_FIELDS {
                    let old = field.get(row);
                    let new = field.get(record);
                    if old != new {
                        report.changes.push(FieldChange {
                            title: record.title.clone(),
                            field: field.header(),
                            old: old.to_string(),
                            new: new.to_string(),
                        });
                        info!(
                            title = %record.title,
                            field = field.header(),
                            old, new,
                            "issue field updated"
                        );
                        field.set(row, new.to_string());
                        row_changed = true;
                    }
                }

                if row_changed {
                    row.last_updated = now.to_string();
                    report.updated += 1;
                } else {
                    report.unchanged += 1;
                }
            }
        }
    }

    report
}
