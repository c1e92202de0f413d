/// Rounds `value` to the given number of decimal places.
///
/// Rounding is decided on the exact decimal expansion of the binary value, so
/// `2.675` (stored as `2.67499999...`) rounds down to `2.67`.
#[inline]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
