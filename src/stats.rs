//! Summary statistics over the tracking sheet.

use crate::types::Issue;
use std::collections::HashMap;

/// Basic workbook statistics for the `stats` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackerStats {
    pub total: usize,
    /// (value, count), descending by count then alphabetical. Empty cells
    /// are not counted.
    pub by_status: Vec<(String, usize)>,
    pub by_priority: Vec<(String, usize)>,
    pub by_type: Vec<(String, usize)>,
    /// Most recent `Last Updated` timestamp, if any row carries one.
    pub last_updated: Option<String>,
}

/// Collect statistics from the issue table.
pub fn collect(issues: &[Issue]) -> TrackerStats {
    TrackerStats {
        total: issues.len(),
        by_status: value_counts(issues, status_of),
        by_priority: value_counts(issues, priority_of),
        by_type: value_counts(issues, type_of),
        // Timestamps are YYYY-MM-DD HH:MM:SS, so string max is newest.
        last_updated: issues
            .iter()
            .map(|i| i.last_updated.as_str())
            .filter(|ts| !ts.is_empty())
            .max()
            .map(str::to_string),
    }
}

fn status_of(issue: &Issue) -> &str {
    &issue.status
}

fn priority_of(issue: &Issue) -> &str {
    &issue.priority
}

fn type_of(issue: &Issue) -> &str {
    &issue.issue_type
}

fn value_counts(issues: &[Issue], field: fn(&Issue) -> &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for issue in issues {
        let value = field(issue);
        if !value.is_empty() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    let mut pairs: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn issue(status: &str, priority: &str, updated: &str) -> Issue {
        let mut i = Issue::with_title("t");
        i.status = status.to_string();
        i.priority = priority.to_string();
        i.last_updated = updated.to_string();
        i
    }

    #[test]
    fn test_empty_table() {
        let stats = collect(&[]);
        assert_eq!(stats.total, 0);
        assert!(stats.by_status.is_empty());
        assert_eq!(stats.last_updated, None);
    }

    #[test]
    fn test_counts_descending_with_alpha_ties() {
        let issues = vec![
            issue("OPEN", "High", ""),
            issue("OPEN", "Low", ""),
            issue("DONE", "High", ""),
            issue("READY", "Medium", ""),
        ];
        let stats = collect(&issues);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.by_status[0], ("OPEN".to_string(), 2));
        // DONE and READY tie at 1, alphabetical order breaks it
        assert_eq!(stats.by_status[1], ("DONE".to_string(), 1));
        assert_eq!(stats.by_status[2], ("READY".to_string(), 1));
        assert_eq!(stats.by_priority[0], ("High".to_string(), 2));
    }

    #[test]
    fn test_empty_values_not_counted() {
        let issues = vec![issue("OPEN", "", ""), issue("", "", "")];
        let stats = collect(&issues);
        assert_eq!(stats.by_status, vec![("OPEN".to_string(), 1)]);
        assert!(stats.by_priority.is_empty());
    }

    #[test]
    fn test_latest_timestamp() {
        let issues = vec![
            issue("OPEN", "High", "2026-03-01 10:00:00"),
            issue("DONE", "Low", "2026-08-15 08:00:00"),
            issue("READY", "Low", ""),
        ];
        let stats = collect(&issues);
        assert_eq!(
            stats.last_updated,
            Some("2026-08-15 08:00:00".to_string())
        );
    }
}
