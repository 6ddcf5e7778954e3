//! Latitude / longitude rows

use glam::dvec2;

use crate::errors::RenderError;
use crate::instruction::Formatter;
use crate::value::Value;

use super::canvas::{Canvas, TextRole};
use super::context::PaintProps;
use super::defaults::TEXT_PAD;
use super::format::ValueFormatter;
use super::SubRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct PositionCoordinates;

/// Latitude and longitude of a `{lat, lon}` map or a `[lat, lon]` list
pub fn lat_lon(value: &Value) -> Option<(f64, f64)> {
    let (lat, lon) = match value {
        Value::Map(map) => (map.get("lat")?, map.get("lon")?),
        Value::List(items) => match items.as_slice() {
            [lat, lon] => (lat, lon),
            _ => return None,
        },
        _ => return None,
    };
    Some((lat.as_f64()?, lon.as_f64()?))
}

impl SubRenderer for PositionCoordinates {
    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        props: &PaintProps<'_>,
        fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        let size = canvas.size();
        if let Some(caption) = props.caption() {
            canvas.text(caption, dvec2(TEXT_PAD, TEXT_PAD), TextRole::Caption);
        }
        let Some((lat, lon)) = props.value().and_then(lat_lon) else {
            return Ok(());
        };
        let formatter = props.formatter().or(Some(Formatter::LonLats));
        let rows = [("lat", lat, size.y / 3.0), ("lon", lon, size.y * 2.0 / 3.0)];
        for (axis, degrees, y) in rows {
            let text = fmt.format(formatter, &[Value::from(axis)], &Value::Number(degrees));
            canvas.text(&text, dvec2(size.x / 2.0, y), TextRole::Value);
        }
        Ok(())
    }
}
