pub mod cli;
pub mod document;
pub mod errors;
pub mod exitcode;
pub mod region;
pub mod util;

pub use document::remove_region_in_place;
pub use region::{excise, find_region, DelimiterPair, RegionQuery, RegionSpan};
