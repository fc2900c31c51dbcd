use serde::{Deserialize, Serialize};

//==============================================================================
// Workbook layout
//==============================================================================

/// Canonical column order of the tracking sheet.
pub const COLUMNS: [&str; 10] = [
    "Title",
    "Type",
    "Priority",
    "Status",
    "Deadline",
    "Due Date",
    "Created By",
    "Created On",
    "Last Updated",
    "Comments",
];

/// Name of the worksheet holding the issue table.
pub const SHEET_NAME: &str = "Issues";

//==============================================================================
// Issue record
//==============================================================================

/// One row of the tracking sheet. Scraper batches deserialize into this
/// directly, so the serde names match the sheet headers.
///
/// Everything is a string: the upstream scraper delivers display values
/// (dates included) and the sheet stores them verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Type", default)]
    pub issue_type: String,

    #[serde(rename = "Priority", default)]
    pub priority: String,

    #[serde(rename = "Status", default)]
    pub status: String,

    #[serde(rename = "Deadline", default)]
    pub deadline: String,

    #[serde(rename = "Due Date", default)]
    pub due_date: String,

    #[serde(rename = "Created By", default)]
    pub created_by: String,

    #[serde(rename = "Created On", default)]
    pub created_on: String,

    #[serde(rename = "Last Updated", default)]
    pub last_updated: String,

    #[serde(rename = "Comments", default)]
    pub comments: String,
}

impl Issue {
    /// Create an issue with only the title set.
    pub fn with_title<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Cell values in canonical column order.
    pub fn row_values(&self) -> [&str; 10] {
        [
            &self.title,
            &self.issue_type,
            &self.priority,
            &self.status,
            &self.deadline,
            &self.due_date,
            &self.created_by,
            &self.created_on,
            &self.last_updated,
            &self.comments,
        ]
    }

    /// Set a field by its sheet header. Returns false for unknown headers,
    /// which the reader ignores.
    pub fn set_by_header(&mut self, header: &str, value: String) -> bool {
        match header {
            "Title" => self.title = value,
            "Type" => self.issue_type = value,
            "Priority" => self.priority = value,
            "Status" => self.status = value,
            "Deadline" => self.deadline = value,
            "Due Date" => self.due_date = value,
            "Created By" => self.created_by = value,
            "Created On" => self.created_on = value,
            "Last Updated" => self.last_updated = value,
            "Comments" => self.comments = value,
            _ => return false,
        }
        true
    }
}

//==============================================================================
// Tracked fields
//==============================================================================

/// Fields compared during reconciliation. `Title` is the key and `Comments`
/// belongs to the sheet (humans write there), so neither is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Type,
    Priority,
    Status,
    Deadline,
    DueDate,
    CreatedBy,
    CreatedOn,
}

/// Comparison order, which is also the order changes are reported in.
pub const TRACKED_FIELDS: [Field; 7] = [
    Field::Status,
    Field::Priority,
    Field::Type,
    Field::DueDate,
    Field::Deadline,
    Field::CreatedBy,
    Field::CreatedOn,
];

impl Field {
    /// Sheet header for this field.
    pub fn header(&self) -> &'static str {
        match self {
            Field::Type => "Type",
            Field::Priority => "Priority",
            Field::Status => "Status",
            Field::Deadline => "Deadline",
            Field::DueDate => "Due Date",
            Field::CreatedBy => "Created By",
            Field::CreatedOn => "Created On",
        }
    }

    /// Read this field from an issue.
    pub fn get<'a>(&self, issue: &'a Issue) -> &'a str {
        match self {
            Field::Type => &issue.issue_type,
            Field::Priority => &issue.priority,
            Field::Status => &issue.status,
            Field::Deadline => &issue.deadline,
            Field::DueDate => &issue.due_date,
            Field::CreatedBy => &issue.created_by,
            Field::CreatedOn => &issue.created_on,
        }
    }

    /// Write this field on an issue.
    pub fn set(&self, issue: &mut Issue, value: String) {
        match self {
            Field::Type => issue.issue_type = value,
            Field::Priority => issue.priority = value,
            Field::Status => issue.status = value,
            Field::Deadline => issue.deadline = value,
            Field::DueDate => issue.due_date = value,
            Field::CreatedBy => issue.created_by = value,
            Field::CreatedOn => issue.created_on = value,
        }
    }
}

//==============================================================================
// Status coloring
//==============================================================================

/// Fill color (RGB) for a status cell, matched case-insensitively by
/// substring. DONE wins over OPEN etc. when a status contains both.
pub fn status_fill(status: &str) -> Option<u32> {
    let upper = status.to_uppercase();
    if upper.contains("DONE") {
        Some(0xCCFFCC)
    } else if upper.contains("OPEN") {
        Some(0xFFCCCC)
    } else if upper.contains("READY") {
        Some(0xFFFFCC)
    } else if upper.contains("IN PROGRESS") {
        Some(0xFFE6CC)
    } else {
        None
    }
}
