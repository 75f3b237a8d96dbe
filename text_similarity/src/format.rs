/// Number of fractional digits in a formatted percentage.
pub const DECIMAL_PLACES: usize = 2;

/// Renders a percentage with exactly [`DECIMAL_PLACES`] fractional digits.
///
/// The stored binary value is rounded to the nearest decimal, so `0.005`,
/// which is slightly above one half-cent as an `f64`, becomes `"0.01"`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.prec$}", prec = DECIMAL_PLACES)
}
