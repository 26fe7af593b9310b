//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueEnum, ValueHint};
use clap_complete::Shell;

use crate::region::DelimiterPair;

/// Delete a marker-anchored, delimiter-balanced block of lines from a file in place
#[derive(Parser, Debug)]
#[command(name = "rmblock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The file to edit in place
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Substring that anchors the first line of the block
    #[arg(short = 's', long, env = "RMBLOCK_START_MARKER")]
    pub start_marker: Option<String>,

    /// Substring that opens the balanced region (e.g. "Positioned(")
    #[arg(short = 'm', long, env = "RMBLOCK_OPEN_MARKER")]
    pub open_marker: Option<String>,

    /// Delimiter pair whose balance closes the region
    #[arg(short = 'p', long, value_enum, default_value_t = PairArg::Paren)]
    pub pair: PairArg,

    /// Turn debugging information on (-d, -d -d, -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairArg {
    Paren,
    Curly,
    Square,
    Angle,
}

impl From<PairArg> for DelimiterPair {
    fn from(pair: PairArg) -> Self {
        match pair {
            PairArg::Paren => DelimiterPair::Paren,
            PairArg::Curly => DelimiterPair::Curly,
            PairArg::Square => DelimiterPair::Square,
            PairArg::Angle => DelimiterPair::Angle,
        }
    }
}
