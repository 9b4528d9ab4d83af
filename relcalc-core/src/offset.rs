//! Tilde notation for relative coordinates.

use crate::coords::Coordinates;

/// Marker prefixed to every relative coordinate token.
pub const RELATIVE_MARKER: char = '~';

/// Formats `value` relative to `reference`.
///
/// A zero delta renders as the bare marker (`~`), anything else as the marker
/// followed by the signed delta (`~5`, `~-3`).
pub fn format_offset(value: i64, reference: i64) -> String {
    let delta = i128::from(value) - i128::from(reference);
    if delta == 0 {
        RELATIVE_MARKER.to_string()
    } else {
        format!("{RELATIVE_MARKER}{delta}")
    }
}

/// Formats every axis of `point` relative to the matching axis of `origin`.
pub fn format_triple(point: &Coordinates, origin: &Coordinates) -> String {
    point
        .axes()
        .iter()
        .zip(origin.axes())
        .map(|(value, reference)| format_offset(*value, reference))
        .collect::<Vec<_>>()
        .join(" ")
}
