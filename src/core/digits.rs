/// Values in this magnitude range render positionally; everything else in
/// scientific notation.
const PLAIN_NOTATION_MIN: f64 = 1e-3;
const PLAIN_NOTATION_MAX: f64 = 1e7;

/// Canonical decimal rendering of `value` used by the marker classifier.
#[must_use]
pub fn canonical_decimal(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || (PLAIN_NOTATION_MIN..PLAIN_NOTATION_MAX).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

/// Mantissa characters of `value` with the exponent, the decimal point and
/// trailing fractional zeros removed.
///
/// A sign character, when present, is kept.
#[must_use]
pub fn digit_string(value: f64) -> String {
    let mut text = canonical_decimal(value);
    if let Some(exponent) = text.find(['e', 'E']) {
        text.truncate(exponent);
    }
    if let Some(point) = text.find('.') {
        let trimmed = text.trim_end_matches('0').len();
        text.truncate(trimmed);
        text.remove(point);
    }
    text
}

/// Returns `true` when the characters of [`digit_string`] strictly increase.
///
/// Negative values keep their leading `-`, which sorts below every digit.
#[must_use]
pub fn is_strictly_increasing_digits(value: f64) -> bool {
    let digits = digit_string(value);
    digits
        .as_bytes()
        .windows(2)
        .all(|pair| pair[0] < pair[1])
}
