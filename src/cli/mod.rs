//! CLI command handlers

pub mod commands;

pub use commands::{export, init, open_workbook, stats, update};
