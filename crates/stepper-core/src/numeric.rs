//! Number helpers shared by numeric widgets.

use crate::error::{Result, StepperError};

/// `pattern` attribute for numeric text inputs. Brings up the numeric keypad
/// on touch platforms.
pub const NUMERIC_PATTERN: &str = "[0-9]*";

/// Saturate `v` into `[min, max]`. NaN lands on `min`.
///
/// Unlike `f64::clamp` this never panics, even when `min > max`; `max` wins.
pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
    v.max(min).min(max)
}

/// Parse the longest numeric prefix of `text`, the way browsers parse a
/// float out of free text: leading whitespace is skipped, trailing garbage is
/// ignored, `Infinity` is accepted.
pub fn parse_float(text: &str) -> Result<f64> {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return Ok(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        i = j;
    }

    if digits == 0 {
        return Err(StepperError::NotANumber(text.to_string()));
    }

    // Exponent only counts when at least one digit follows it.
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i]
        .parse::<f64>()
        .map_err(|_| StepperError::NotANumber(text.to_string()))
}

/// Display form of a value: integral values have no fractional part, very
/// large or very small magnitudes use an explicit-sign exponent.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    let abs = v.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{v}");
    }
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_saturates() {
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(f64::NAN, 0.0, 1.0), 0.0);
        assert_eq!(clamp(f64::INFINITY, -f64::MAX, f64::MAX), f64::MAX);
    }

    #[test]
    fn test_clamp_inverted_bounds_prefers_max() {
        assert_eq!(clamp(5.0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn test_parse_float_plain() {
        assert_eq!(parse_float("42").unwrap(), 42.0);
        assert_eq!(parse_float("-3.25").unwrap(), -3.25);
        assert_eq!(parse_float("+7").unwrap(), 7.0);
        assert_eq!(parse_float(".5").unwrap(), 0.5);
        assert_eq!(parse_float("5.").unwrap(), 5.0);
    }

    #[test]
    fn test_parse_float_prefix_and_whitespace() {
        assert_eq!(parse_float("  12abc").unwrap(), 12.0);
        assert_eq!(parse_float("1.5.6").unwrap(), 1.5);
        assert_eq!(parse_float("\t-8 apples").unwrap(), -8.0);
    }

    #[test]
    fn test_parse_float_exponent() {
        assert_eq!(parse_float("1e3").unwrap(), 1000.0);
        assert_eq!(parse_float("2.5E-1").unwrap(), 0.25);
        // dangling exponent is ignored
        assert_eq!(parse_float("4e").unwrap(), 4.0);
        assert_eq!(parse_float("4e+").unwrap(), 4.0);
    }

    #[test]
    fn test_parse_float_infinity() {
        assert_eq!(parse_float("Infinity").unwrap(), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx").unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_float_rejects() {
        for bad in ["", "   ", "abc", "-", ".", "e5", "+.", "inf", "NaN"] {
            assert!(
                matches!(parse_float(bad), Err(StepperError::NotANumber(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(33.0), "33");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-9), "1.5e-9");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
