//! Formatter resolution.
//!
//! Instructions only carry a [`Formatter`] tag and its parameters. The
//! drawing layer resolves the tag to text through a [`ValueFormatter`],
//! which a host normally backs with its own locale-aware formatting.

use crate::angle::{DEFAULT_FALLBACK, make_angle_formatter};
use crate::instruction::Formatter;
use crate::value::Value;

pub trait ValueFormatter: Send + Sync {
    /// Text for `value`. `formatter` is `None` for pre-formatted values.
    fn format(&self, formatter: Option<Formatter>, params: &[Value], value: &Value) -> String;
}

/// Minimal formatter: fixed decimals, compass directions and
/// degree-minute coordinates. Everything else prints as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormatter;

impl ValueFormatter for DisplayFormatter {
    fn format(&self, formatter: Option<Formatter>, params: &[Value], value: &Value) -> String {
        if value.is_null() {
            return DEFAULT_FALLBACK.to_string();
        }
        match formatter {
            Some(Formatter::Direction360) => {
                let leading_zero = params.first().is_some_and(Value::is_truthy);
                make_angle_formatter(true, leading_zero, DEFAULT_FALLBACK).format(value)
            }
            Some(Formatter::Decimal) => {
                // integer digits are a layout hint for fixed-width fonts
                let fraction = params.get(1).and_then(Value::as_f64).unwrap_or(1.0);
                fixed(value, fraction.clamp(0.0, 6.0) as usize)
            }
            Some(Formatter::Speed | Formatter::Distance) => fixed(value, 1),
            Some(Formatter::LonLats) => lon_lats(value, params.first().and_then(Value::as_str)),
            Some(Formatter::Time | Formatter::Date | Formatter::DateTime) | None => plain(value),
        }
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::Text(text) => text.clone(),
        other => other.to_string(),
    }
}

fn fixed(value: &Value, decimals: usize) -> String {
    match value.as_f64() {
        Some(n) if n.is_finite() => format!("{n:.decimals$}"),
        Some(_) => DEFAULT_FALLBACK.to_string(),
        None => plain(value),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Lat,
    Lon,
}

fn lon_lats(value: &Value, axis: Option<&str>) -> String {
    match (axis, value) {
        (Some("lat"), v) => axis_text(v.as_f64(), Axis::Lat),
        (Some("lon"), v) => axis_text(v.as_f64(), Axis::Lon),
        (_, Value::Map(map)) => {
            let lat = map.get("lat").and_then(Value::as_f64);
            let lon = map.get("lon").and_then(Value::as_f64);
            format!("{} {}", axis_text(lat, Axis::Lat), axis_text(lon, Axis::Lon))
        }
        (_, other) => plain(other),
    }
}

/// `DD°MM.mmm'H` for latitude, `DDD°MM.mmm'H` for longitude
fn axis_text(degrees: Option<f64>, axis: Axis) -> String {
    let Some(degrees) = degrees.filter(|d| d.is_finite()) else {
        return DEFAULT_FALLBACK.to_string();
    };
    let hemisphere = match (axis, degrees < 0.0) {
        (Axis::Lat, false) => 'N',
        (Axis::Lat, true) => 'S',
        (Axis::Lon, false) => 'E',
        (Axis::Lon, true) => 'W',
    };
    // work in thousandths of a minute so 59.9999' carries into the degrees
    let total = (degrees.abs() * 60_000.0).round() as u64;
    let whole = total / 60_000;
    let minutes = (total % 60_000) as f64 / 1000.0;
    match axis {
        Axis::Lat => format!("{whole:02}°{minutes:06.3}'{hemisphere}"),
        Axis::Lon => format!("{whole:03}°{minutes:06.3}'{hemisphere}"),
    }
}
