//! Tick layout for dial-style gauges.
//!
//! Given a start/end sweep and major/minor step sizes, produce the ordered
//! angles at which graduation marks are drawn. The output is recomputed per
//! paint; renderers may memoize it on an identical [`TickConfig`].

/// Hard ceiling on visited angles per call. A zero-ish step would otherwise
/// loop for a very long time; the sequence is truncated here instead.
pub const MAX_TICK_STEPS: usize = 5000;

pub const DEFAULT_START_DEG: f64 = 0.0;
pub const DEFAULT_END_DEG: f64 = 360.0;
pub const DEFAULT_STEP_MAJOR: f64 = 30.0;
pub const DEFAULT_STEP_MINOR: f64 = 10.0;

/// Classification precision in degrees
const ROUNDING: f64 = 1e-6;
/// Tolerance for the loop-stop test
const END_EPSILON: f64 = 1e-9;

/// A resolved sweep between two dial angles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub start: f64,
    pub end: f64,
    /// Signed angular span, `end - start`
    pub sweep: f64,
    /// `1.0` for clockwise sweeps (including zero), `-1.0` otherwise
    pub direction: f64,
}

/// Resolve a start/end pair into a sweep.
///
/// Equal endpoints mean a full turn rather than a point gauge. Non-finite
/// input yields a degenerate zero sweep so NaN never reaches tick layout.
pub fn compute_sweep(start_deg: f64, end_deg: f64) -> Sweep {
    if !start_deg.is_finite() || !end_deg.is_finite() {
        let start = if start_deg.is_finite() { start_deg } else { 0.0 };
        return Sweep {
            start,
            end: start,
            sweep: 0.0,
            direction: 1.0,
        };
    }
    let sweep = if start_deg == end_deg {
        360.0
    } else {
        end_deg - start_deg
    };
    Sweep {
        start: start_deg,
        end: start_deg + sweep,
        sweep,
        direction: if sweep >= 0.0 { 1.0 } else { -1.0 },
    }
}

/// How major ticks are picked out of the minor stepping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MajorMode {
    /// Major iff the angle itself is a multiple of the major step
    #[default]
    Absolute,
    /// Major iff the offset from the start angle is a multiple of the major step
    Relative,
}

/// Input to [`build_tick_angles`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickConfig {
    pub start_deg: f64,
    pub end_deg: f64,
    /// Magnitude only; zero or non-finite falls back to the default
    pub step_major: f64,
    /// Magnitude only; zero or non-finite falls back to the default
    pub step_minor: f64,
    pub include_end: bool,
    pub major_mode: MajorMode,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            start_deg: DEFAULT_START_DEG,
            end_deg: DEFAULT_END_DEG,
            step_major: DEFAULT_STEP_MAJOR,
            step_minor: DEFAULT_STEP_MINOR,
            include_end: false,
            major_mode: MajorMode::Absolute,
        }
    }
}

impl TickConfig {
    pub fn sweep(start_deg: f64, end_deg: f64) -> Self {
        Self {
            start_deg,
            end_deg,
            ..Self::default()
        }
    }

    pub fn steps(mut self, step_major: f64, step_minor: f64) -> Self {
        self.step_major = step_major;
        self.step_minor = step_minor;
        self
    }

    pub fn include_end(mut self, include_end: bool) -> Self {
        self.include_end = include_end;
        self
    }

    pub fn major_mode(mut self, major_mode: MajorMode) -> Self {
        self.major_mode = major_mode;
        self
    }
}

/// Ordered major and minor tick angles in degrees
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickAngles {
    pub majors: Vec<f64>,
    pub minors: Vec<f64>,
    /// True when [`MAX_TICK_STEPS`] cut the sequence short
    pub truncated: bool,
}

impl TickAngles {
    pub fn len(&self) -> usize {
        self.majors.len() + self.minors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.majors.is_empty() && self.minors.is_empty()
    }
}

/// Lay out ticks by stepping from the start angle in minor increments.
///
/// The loop stops once an angle reaches or passes the end. With
/// `include_end` the exact end angle is classified and appended once
/// afterwards, whether or not the stepping would have landed on it.
pub fn build_tick_angles(config: &TickConfig) -> TickAngles {
    let sweep = compute_sweep(config.start_deg, config.end_deg);
    let step_major = step_or_default(config.step_major, DEFAULT_STEP_MAJOR);
    let step_minor = step_or_default(config.step_minor, DEFAULT_STEP_MINOR);

    let mut ticks = TickAngles::default();
    let push = |ticks: &mut TickAngles, angle: f64| {
        if is_major(angle, sweep.start, step_major, config.major_mode) {
            ticks.majors.push(angle);
        } else {
            ticks.minors.push(angle);
        }
    };

    let mut i = 0usize;
    loop {
        let angle = sweep.start + sweep.direction * step_minor * i as f64;
        if sweep.direction * (angle - sweep.end) >= -END_EPSILON {
            break;
        }
        if i >= MAX_TICK_STEPS {
            ticks.truncated = true;
            break;
        }
        push(&mut ticks, angle);
        i += 1;
    }

    if config.include_end && !ticks.truncated {
        push(&mut ticks, sweep.end);
    }
    ticks
}

fn step_or_default(step: f64, default: f64) -> f64 {
    let step = step.abs();
    if step.is_finite() && step > 0.0 { step } else { default }
}

fn is_major(angle: f64, start: f64, step_major: f64, mode: MajorMode) -> bool {
    let reference = match mode {
        MajorMode::Absolute => angle,
        MajorMode::Relative => (angle - start).abs(),
    };
    is_multiple(round_to(reference, ROUNDING), step_major)
}

fn round_to(x: f64, precision: f64) -> f64 {
    (x / precision).round() * precision
}

fn is_multiple(x: f64, step: f64) -> bool {
    let r = x.rem_euclid(step);
    r < ROUNDING || step - r < ROUNDING
}
