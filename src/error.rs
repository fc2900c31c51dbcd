use thiserror::Error;

pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel read error: {0}")]
    ExcelRead(String),

    #[error("Excel write error: {0}")]
    ExcelWrite(String),

    #[error("CSV export error: {0}")]
    Csv(String),

    #[error("Batch error: {0}")]
    Batch(String),

    #[error("Config error: {0}")]
    Config(String),
}
