/// Renders a quantity in its shortest round-trip form, always with a fractional
/// part or an exponent (`0.1`, `1.0`, `5e-05`, `1.5e+16`).
///
/// Exponents carry an explicit sign and at least two digits.
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let shortest = format!("{value:?}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
