//! Angle normalization and fixed-width direction/bearing text.
//!
//! Non-finite inputs are the "no data" sentinel: the normalizers pass them
//! through untouched and the formatter replaces them with a fallback string.

use crate::value::Value;

/// Placeholder shown when an angle has no usable value
pub const DEFAULT_FALLBACK: &str = "---";

/// Reduce an angle to `[0, 360)`. Non-finite input is returned unchanged.
pub fn normalize360(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    let r = degrees.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Reduce an angle to a signed bearing.
///
/// The boundary is canonicalized to `-180`, so the range is `[-180, 180)`:
/// `180` and `-180` always display identically. Non-finite input is
/// returned unchanged.
pub fn normalize180(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return degrees;
    }
    let shifted = ((degrees + 180.0) % 360.0 + 360.0) % 360.0 - 180.0;
    if shifted >= 180.0 { -180.0 } else { shifted }
}

/// Formats raw angle values as direction (`0..=359`) or bearing text.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleFormatter {
    is_direction: bool,
    leading_zero: bool,
    fallback: String,
}

/// Build a formatter closed over its flags.
///
/// * `is_direction` - true renders an unsigned 360° direction, false a
///   signed relative bearing.
/// * `leading_zero` - pad directions to three digits. Ignored for bearings.
/// * `fallback` - text for values that are missing or not finite.
pub fn make_angle_formatter(
    is_direction: bool,
    leading_zero: bool,
    fallback: impl Into<String>,
) -> AngleFormatter {
    AngleFormatter {
        is_direction,
        leading_zero,
        fallback: fallback.into(),
    }
}

impl AngleFormatter {
    /// Format a host value, coercing numeric text
    pub fn format(&self, raw: &Value) -> String {
        match raw.as_f64() {
            Some(degrees) => self.format_degrees(degrees),
            None => self.fallback.clone(),
        }
    }

    pub fn format_degrees(&self, degrees: f64) -> String {
        if !degrees.is_finite() {
            return self.fallback.clone();
        }
        if self.is_direction {
            // 359.6 rounds to 360, which must wrap back to 0
            let whole = normalize360(degrees).round() as i64 % 360;
            if self.leading_zero {
                format!("{whole:03}")
            } else {
                whole.to_string()
            }
        } else {
            let bearing = normalize180(degrees);
            let magnitude = bearing.abs().round() as i64;
            if magnitude == 180 || (bearing < 0.0 && magnitude != 0) {
                format!("-{magnitude}")
            } else {
                magnitude.to_string()
            }
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn direction(leading_zero: bool) -> AngleFormatter {
        make_angle_formatter(true, leading_zero, DEFAULT_FALLBACK)
    }

    fn bearing() -> AngleFormatter {
        make_angle_formatter(false, false, DEFAULT_FALLBACK)
    }

    #[test]
    fn normalize360_reduces_into_range() {
        assert_eq!(normalize360(0.0), 0.0);
        assert_eq!(normalize360(360.0), 0.0);
        assert_eq!(normalize360(725.0), 5.0);
        assert_eq!(normalize360(-10.0), 350.0);
        assert_eq!(normalize360(-720.0), 0.0);
        let tiny = normalize360(-1e-15);
        assert!((0.0..360.0).contains(&tiny), "{tiny}");
    }

    #[test]
    fn normalize360_is_idempotent() {
        for x in [-1234.5, -360.0, -0.25, 0.0, 17.0, 359.999, 360.0, 9876.125] {
            let once = normalize360(x);
            assert_eq!(normalize360(once), once, "x = {x}");
        }
    }

    #[test]
    fn normalize360_passes_non_finite_through() {
        assert!(normalize360(f64::NAN).is_nan());
        assert_eq!(normalize360(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize360(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn normalize180_uses_negative_boundary() {
        assert_eq!(normalize180(180.0), -180.0);
        assert_eq!(normalize180(-180.0), -180.0);
        assert_eq!(normalize180(540.0), -180.0);
        assert_eq!(normalize180(185.0), -175.0);
        assert_eq!(normalize180(-185.0), 175.0);
        assert_eq!(normalize180(90.0), 90.0);
        assert!(normalize180(f64::NAN).is_nan());
    }

    #[test]
    fn normalized_values_stay_in_range() {
        let mut x = -1000.0;
        while x <= 1000.0 {
            let d = normalize360(x);
            assert!((0.0..360.0).contains(&d), "normalize360({x}) = {d}");
            let b = normalize180(x);
            assert!((-180.0..180.0).contains(&b), "normalize180({x}) = {b}");
            x += 7.3;
        }
    }

    #[test]
    fn direction_text() {
        assert_eq!(direction(true).format(&Value::Number(-10.0)), "350");
        assert_eq!(direction(true).format(&Value::Number(5.0)), "005");
        assert_eq!(direction(false).format(&Value::Number(5.0)), "5");
        assert_eq!(direction(false).format(&Value::Number(359.6)), "0");
        assert_eq!(direction(true).format(&Value::Number(359.4)), "359");
        assert_eq!(direction(true).format(&Value::from("90")), "090");
    }

    #[test]
    fn bearing_text() {
        assert_eq!(bearing().format(&Value::Number(185.0)), "-175");
        assert_eq!(bearing().format(&Value::Number(45.4)), "45");
        assert_eq!(bearing().format(&Value::Number(-45.6)), "-46");
        assert_eq!(bearing().format(&Value::Number(180.0)), "-180");
        assert_eq!(bearing().format(&Value::Number(179.7)), "-180");
        assert_eq!(bearing().format(&Value::Number(-0.3)), "0");
    }

    #[test]
    fn leading_zero_does_not_pad_bearings() {
        let f = make_angle_formatter(false, true, DEFAULT_FALLBACK);
        assert_eq!(f.format(&Value::Number(5.0)), "5");
        assert_eq!(f.format(&Value::Number(-5.0)), "-5");
    }

    #[test]
    fn non_finite_uses_fallback() {
        let f = make_angle_formatter(true, true, "n/a");
        assert_eq!(f.format(&Value::Number(f64::NAN)), "n/a");
        assert_eq!(f.format(&Value::Number(f64::INFINITY)), "n/a");
        assert_eq!(f.format(&Value::Number(f64::NEG_INFINITY)), "n/a");
        assert_eq!(f.format(&Value::Null), "n/a");
        assert_eq!(direction(true).format(&Value::from("")), DEFAULT_FALLBACK);
    }
}
