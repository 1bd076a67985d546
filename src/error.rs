use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures. Per-line decode and coercion problems never show up here,
/// they are absorbed where the line is parsed.
#[derive(Debug, Error)]
pub enum LogReportError {
    #[error("cannot open log file {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot read log file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write report output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to serialize report output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LogReportError>;
