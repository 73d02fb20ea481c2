mod core;
mod parse;

pub use core::Angle;
pub use parse::{parse_dms, parse_hms};
