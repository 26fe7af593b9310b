use std::path::Path;

use crate::errors::{RegionError, RegionResult};

pub fn ensure_file_exists(path: &Path) -> RegionResult<()> {
    if !path.exists() {
        Err(RegionError::FileNotFound(path.to_path_buf()))
    } else if !path.is_file() {
        Err(RegionError::InvalidTarget {
            path: path.to_path_buf(),
            reason: "Not a file".to_string(),
        })
    } else {
        Ok(())
    }
}
