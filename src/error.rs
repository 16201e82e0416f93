//! Private module for selective re-export.

use thiserror::Error;

/// Everything that can stop a generator run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("missing ring size, pass it as `--N <N>`")]
    MissingRingSize,
    #[error("invalid ring size `{0}`, expected a positive integer")]
    InvalidRingSize(String),
    #[error("ring size must be at least 1, got {0}")]
    RingSizeTooSmall(i64),
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unexpected arguments: {0:?}")]
    UnexpectedArguments(Vec<std::ffi::OsString>),
    #[error("invalid report format `{0}`, expected `text` or `json`")]
    InvalidReportFormat(String),
    #[error("failed to parse arguments: {0}")]
    Args(#[from] pico_args::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Indicates a mistake on the command line rather than a failure while generating.
    pub fn is_usage(&self) -> bool {
        !matches!(self, Error::Io(_) | Error::Json(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
