//! In-place document editing: read all lines, rewrite the whole file.
//!
//! Lines keep their own terminators (`\n` or `\r\n`) so a rewrite preserves
//! the endings exactly as read; a final unterminated line stays unterminated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::errors::{RegionError, RegionResult};
use crate::region::{excise, find_region, RegionQuery, RegionSpan};
use crate::util::path::ensure_file_exists;

/// Read the file into one string per line, terminators included.
pub fn load_lines(path: &Path) -> RegionResult<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(RegionError::FileReadError)?;
    Ok(contents
        .split_inclusive('\n')
        .map(str::to_string)
        .collect())
}

/// Overwrite the file with the given lines, truncating prior content.
pub fn write_lines(path: &Path, lines: &[String]) -> RegionResult<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(RegionError::FileReadError)?;
    for line in lines {
        file.write_all(line.as_bytes())
            .map_err(RegionError::FileReadError)?;
    }
    Ok(())
}

/// Delete the marker-anchored balanced region from the file at `path`.
///
/// The file is written only after the region has been located, so on any
/// failure (marker missing, region never balancing) it is left untouched.
/// Returns the span that was removed.
#[instrument(level = "debug")]
pub fn remove_region_in_place(path: &Path, query: &RegionQuery) -> RegionResult<RegionSpan> {
    ensure_file_exists(path)?;

    let lines = load_lines(path)?;
    let span = find_region(&lines, query)?;
    debug!("removing line indices {}..={}", span.start, span.end);

    let kept = excise(&lines, span);
    write_lines(path, &kept)?;
    Ok(span)
}
