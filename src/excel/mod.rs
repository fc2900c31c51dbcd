//! Workbook I/O for the tracking sheet.
//!
//! Reading goes through calamine, writing through rust_xlsxwriter; the
//! whole table is rewritten on every save, formatting included.

mod reader;
mod writer;

pub use reader::{load_issues, load_issues_or_empty};
pub use writer::write_issues;
