//! Lenient scalar parsing shared by cell conversions.

/// Largest magnitude where every integer is exactly representable as `f64`.
const F64_SAFE_INT: f64 = 9_007_199_254_740_992.0;

/// Parse an integer from text, tolerating surrounding whitespace and a
/// leading `+`.
pub(crate) fn parse_integer(s: &str) -> Option<i128> {
    let s = s.trim();
    let digits = s.strip_prefix('+').unwrap_or(s);
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i128>().ok()
}

/// Parse a boolean from text (`true`/`false`, any case, or `1`/`0`).
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("true") || s == "1" {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" {
        Some(false)
    } else {
        None
    }
}

/// Integral, finite floats within the exactly-representable range.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn float_to_i128(v: f64) -> Option<i128> {
    if !v.is_finite() || v.fract() != 0.0 || v.abs() > F64_SAFE_INT {
        return None;
    }

    Some(v as i128)
}
