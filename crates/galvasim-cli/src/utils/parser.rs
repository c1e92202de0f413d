use galvasim::core::environment::Catalyst;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(
        "Invalid number format: '{0}'. Expected a decimal such as 0.5, 1.5e-3 or 1.5x10^-3."
    )]
    InvalidNumber(String),

    #[error("Unknown catalyst '{0}'. Expected None, Platinum, Palladium or Nickel.")]
    InvalidCatalyst(String),
}

/// Parses plain decimals and scientific notation written either as `1.5e-3` or `1.5x10^-3`.
pub fn parse_scientific_notation(input: &str) -> Result<f64, ParseError> {
    let normalized = input.trim().to_ascii_lowercase().replace("x10^", "e");
    if !is_decimal_literal(&normalized) {
        return Err(ParseError::InvalidNumber(input.to_string()));
    }
    normalized
        .parse()
        .map_err(|_| ParseError::InvalidNumber(input.to_string()))
}

/// Parses a catalyst name; `none` (in any case) means no catalyst.
pub fn parse_catalyst(input: &str) -> Result<Option<Catalyst>, ParseError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ParseError::InvalidCatalyst(input.to_string()))
}

// -?digits(.digits)?(e-?digits)?
fn is_decimal_literal(s: &str) -> bool {
    let (mantissa, exponent) = match s.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (s, None),
    };

    let unsigned = mantissa.strip_prefix('-').unwrap_or(mantissa);
    let mantissa_ok = match unsigned.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(unsigned),
    };

    let exponent_ok = exponent.is_none_or(|e| is_digits(e.strip_prefix('-').unwrap_or(e)));

    mantissa_ok && exponent_ok
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
