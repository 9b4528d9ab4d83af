//! Extraction of integer coordinate triples from free text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Three signed integers separated by runs of anything that is neither a
/// digit nor a minus sign.
pub const COORDS_PATTERN: &str = r"(-?[0-9]+)[^0-9-]+(-?[0-9]+)[^0-9-]+(-?[0-9]+)";

static COORDS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(COORDS_PATTERN).expect("coordinate pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Coordinates {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn axes(&self) -> [i64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Returns the first coordinate triple found in `raw`.
///
/// Only the leftmost match is considered; text after its third number is
/// ignored. Input without three adjacent integers, or with a value that does
/// not fit in an `i64`, yields `None`.
pub fn parse_coordinates(raw: &str) -> Option<Coordinates> {
    let captures = COORDS_RE.captures(raw)?;
    let axis = |index: usize| captures.get(index)?.as_str().parse::<i64>().ok();
    Some(Coordinates::new(axis(1)?, axis(2)?, axis(3)?))
}
