use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegionError {
    #[error("Could not find start marker: {0:?}")]
    MarkerNotFound(String),

    #[error("Could not find end of region opened by {marker:?}: delimiters never balance")]
    RegionUnbalanced { marker: String },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Invalid target {path}: {reason}")]
    InvalidTarget {
        path: PathBuf,
        reason: String,
    },
}

pub type RegionResult<T> = Result<T, RegionError>;
