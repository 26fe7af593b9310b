use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::document::remove_region_in_place;
use crate::region::RegionQuery;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(file) = cli.file.as_deref() else {
        return Err(CliError::InvalidArgs("no file given".to_string()));
    };
    let Some(start_marker) = cli.start_marker.as_deref() else {
        return Err(CliError::InvalidArgs(
            "no start marker given (--start-marker)".to_string(),
        ));
    };
    let Some(open_marker) = cli.open_marker.as_deref() else {
        return Err(CliError::InvalidArgs(
            "no open marker given (--open-marker)".to_string(),
        ));
    };
    _remove(file, start_marker, open_marker, cli)
}

#[instrument(skip(cli))]
fn _remove(file: &Path, start_marker: &str, open_marker: &str, cli: &Cli) -> CliResult<()> {
    let query = RegionQuery {
        start_marker: start_marker.to_string(),
        open_marker: open_marker.to_string(),
        pair: cli.pair.into(),
    };
    debug!("file: {:?}, query: {:?}", file, query);

    let span = remove_region_in_place(file, &query)?;

    // 1-based line numbers, as an editor would show them
    output::info(&format!(
        "Removing lines {} to {}",
        span.start + 1,
        span.end + 1
    ));
    output::info("Done.");
    Ok(())
}
