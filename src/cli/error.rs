//! CLI-level errors (wraps the region errors)

use thiserror::Error;

use crate::errors::RegionError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Region(#[from] RegionError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Region(e) => match e {
                RegionError::MarkerNotFound(_) | RegionError::RegionUnbalanced { .. } => {
                    crate::exitcode::DATAERR
                }
                RegionError::FileNotFound(_) => crate::exitcode::NOINPUT,
                RegionError::FileReadError(_) => crate::exitcode::IOERR,
                RegionError::InvalidTarget { .. } => crate::exitcode::NOINPUT,
            },
        }
    }
}
