//! Dial geometry: compass-degree polar coordinates and value mapping

use glam::{DVec2, dvec2};

use crate::errors::RenderError;

use super::defaults;

/// Point at `radius` from `center` in compass direction `deg`
/// (0 = up, clockwise, canvas y pointing down)
pub fn polar(center: DVec2, radius: f64, deg: f64) -> DVec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    center + dvec2(sin, -cos) * radius
}

/// Centre and radius of a round dial fitted into a canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialLayout {
    pub center: DVec2,
    pub radius: f64,
}

impl DialLayout {
    pub fn fit(size: DVec2) -> Result<Self, RenderError> {
        if !(size.x.is_finite() && size.y.is_finite()) || size.x <= 0.0 || size.y <= 0.0 {
            return Err(RenderError::EmptyCanvas {
                width: size.x,
                height: size.y,
            });
        }
        Ok(Self {
            center: size / 2.0,
            radius: size.min_element() / 2.0 * defaults::DIAL_FILL,
        })
    }

    pub fn at(&self, fraction: f64, deg: f64) -> DVec2 {
        polar(self.center, self.radius * fraction, deg)
    }

    /// Radial tick from the rim inwards
    pub fn tick(&self, deg: f64, length: f64) -> (DVec2, DVec2) {
        (self.at(1.0, deg), self.at(1.0 - length, deg))
    }
}

/// Linear map of `value` in `[min, max]` onto `[start_deg, end_deg]`,
/// clamped to the range
pub fn value_to_angle(value: f64, min: f64, max: f64, start_deg: f64, end_deg: f64) -> f64 {
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);
    start_deg + (end_deg - start_deg) * t
}

/// Inverse of [`value_to_angle`] without clamping
pub fn angle_to_value(deg: f64, min: f64, max: f64, start_deg: f64, end_deg: f64) -> f64 {
    min + (deg - start_deg) / (end_deg - start_deg) * (max - min)
}

/// Graduation label: whole numbers without decimals, otherwise one decimal
pub fn format_tick_label(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-6 {
        // avoid "-0"
        format!("{}", rounded as i64)
    } else {
        format!("{value:.1}")
    }
}
