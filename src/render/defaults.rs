//! Default ranges and settings for the built-in sub-renderers

/// Which end of a gauge range the warning and alarm sectors guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdSide {
    /// Values at or above the threshold are bad (speed, temperature)
    High,
    /// Values at or below the threshold are bad (depth, battery voltage)
    Low,
}

/// Built-in settings of one dial gauge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeDefaults {
    pub min: f64,
    pub max: f64,
    pub tick_major: f64,
    pub tick_minor: f64,
    pub side: ThresholdSide,
}

pub const SPEED: GaugeDefaults = GaugeDefaults {
    min: 0.0,
    max: 30.0,
    tick_major: 5.0,
    tick_minor: 1.0,
    side: ThresholdSide::High,
};

pub const DEPTH: GaugeDefaults = GaugeDefaults {
    min: 0.0,
    max: 30.0,
    tick_major: 5.0,
    tick_minor: 1.0,
    side: ThresholdSide::Low,
};

pub const TEMPERATURE: GaugeDefaults = GaugeDefaults {
    min: 0.0,
    max: 35.0,
    tick_major: 5.0,
    tick_minor: 1.0,
    side: ThresholdSide::High,
};

pub const VOLTAGE: GaugeDefaults = GaugeDefaults {
    min: 7.0,
    max: 15.0,
    tick_major: 1.0,
    tick_minor: 0.2,
    side: ThresholdSide::Low,
};

// Dial gauge sweep, compass degrees
pub const GAUGE_START_DEG: f64 = -120.0;
pub const GAUGE_END_DEG: f64 = 120.0;

pub const COMPASS_TICK_MAJOR: f64 = 30.0;
pub const COMPASS_TICK_MINOR: f64 = 10.0;

pub const WIND_TICK_MAJOR: f64 = 30.0;
pub const WIND_TICK_MINOR: f64 = 10.0;
pub const WIND_LAY_MIN: f64 = 25.0;
pub const WIND_LAY_MAX: f64 = 45.0;

// Proportions of the dial radius
pub const DIAL_FILL: f64 = 0.92;
pub const MAJOR_TICK_LEN: f64 = 0.12;
pub const MINOR_TICK_LEN: f64 = 0.06;
pub const LABEL_RADIUS: f64 = 0.72;
pub const POINTER_LEN: f64 = 0.85;
pub const SECTOR_RADIUS: f64 = 0.96;

pub const STROKE_WIDTH: f64 = 1.5;
pub const MAJOR_TICK_WIDTH: f64 = 2.0;
pub const MINOR_TICK_WIDTH: f64 = 1.0;
pub const POINTER_WIDTH: f64 = 3.0;
pub const SECTOR_WIDTH: f64 = 6.0;

/// Padding between canvas edge and corner text, pixels
pub const TEXT_PAD: f64 = 4.0;
