//! Balanced-region scanning over a sequence of lines.
//!
//! The scan is a two-state machine: `Searching` walks forward from the
//! start-marker line until a line contains the region-open marker, then
//! `Open` accumulates a delimiter balance per line until it returns to
//! zero. Delimiters inside string or comment literals of the target file
//! are counted like any others; the tool has no lexical awareness of the
//! language it edits.

use tracing::{debug, instrument};

use crate::errors::{RegionError, RegionResult};

/// A delimiter pair whose balance delimits the region to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelimiterPair {
    #[default]
    Paren,
    Curly,
    Square,
    Angle,
}

impl DelimiterPair {
    pub fn chars(self) -> (char, char) {
        match self {
            DelimiterPair::Paren => ('(', ')'),
            DelimiterPair::Curly => ('{', '}'),
            DelimiterPair::Square => ('[', ']'),
            DelimiterPair::Angle => ('<', '>'),
        }
    }
}

/// Inclusive, 0-based interval of lines to delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSpan {
    pub start: usize,
    pub end: usize,
}

/// What to look for: the anchor line, the token that opens the balanced
/// region, and the delimiter pair to balance.
#[derive(Debug, Clone)]
pub struct RegionQuery {
    pub start_marker: String,
    pub open_marker: String,
    pub pair: DelimiterPair,
}

enum ScanState {
    Searching,
    Open { balance: i64, seen_open: bool },
}

/// Locate the region `[start, end]` bounded by the first start-marker line
/// and the line on which the delimiter balance of the first subsequent
/// open-marker region returns to zero.
///
/// The start-marker line itself may open the region. The balance is checked
/// only after a whole line has been counted, so a line may dip through zero
/// mid-line without closing the region. The region is considered closed only
/// once at least one open delimiter has been seen.
#[instrument(level = "debug", skip(lines))]
pub fn find_region(lines: &[String], query: &RegionQuery) -> RegionResult<RegionSpan> {
    let start = lines
        .iter()
        .position(|line| line.contains(&query.start_marker))
        .ok_or_else(|| RegionError::MarkerNotFound(query.start_marker.clone()))?;
    debug!("start marker at line index {}", start);

    let (open, close) = query.pair.chars();
    let mut state = ScanState::Searching;

    for (idx, line) in lines.iter().enumerate().skip(start) {
        if matches!(state, ScanState::Searching) && line.contains(&query.open_marker) {
            debug!("region opened at line index {}", idx);
            state = ScanState::Open {
                balance: 0,
                seen_open: false,
            };
        }

        if let ScanState::Open {
            ref mut balance,
            ref mut seen_open,
        } = state
        {
            for ch in line.chars() {
                if ch == open {
                    *balance += 1;
                    *seen_open = true;
                } else if ch == close {
                    *balance -= 1;
                }
            }
            if *seen_open && *balance == 0 {
                debug!("region closed at line index {}", idx);
                return Ok(RegionSpan { start, end: idx });
            }
        }
    }

    Err(RegionError::RegionUnbalanced {
        marker: query.open_marker.clone(),
    })
}

/// Remove the closed interval `span` from `lines`, leaving every other line
/// untouched.
pub fn excise(lines: &[String], span: RegionSpan) -> Vec<String> {
    let mut kept = Vec::with_capacity(lines.len().saturating_sub(span.end - span.start + 1));
    kept.extend_from_slice(&lines[..span.start]);
    kept.extend_from_slice(&lines[span.end + 1..]);
    kept
}
