//! Decimal rounding helpers.
//!
//! Values are rendered with the requested number of fractional digits (exact
//! binary-to-decimal conversion, ties to even) and parsed back, so `0.125`
//! rounds to `0.12` while `2.675` stays `2.67` because its binary value sits
//! below the midpoint.

/// Rounds `value` to `places` decimal digits.
pub fn round_places(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Rounds `value` to the nearest integer, ties to even.
pub fn round_whole(value: f64) -> f64 {
    value.round_ties_even()
}
