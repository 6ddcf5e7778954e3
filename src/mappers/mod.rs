//! Per-cluster mappers.
//!
//! Every mapper has the same shape: switch on `kind`, build the instruction
//! with the toolkit's `out` helper (or a renderer-specific instruction for
//! dial kinds), and return `None` for an unrecognized kind, which the
//! registry turns into the empty instruction.
//!
//! - [`course`]: course and heading directions, compass dial
//! - [`speed`]: SOG / STW text and speed gauge
//! - [`position`]: boat or waypoint coordinates
//! - [`distance`]: distances, with unit-aware anchor/watch kinds
//! - [`environment`]: depth, water temperature, pressure
//! - [`wind`]: wind angles, direction, speed and the wind dial
//! - [`time`]: captionless clock/date text
//! - [`nav`]: waypoint/route navigation values
//! - [`anchor`]: anchor distance, watch radius and bearing
//! - [`vessel`]: battery voltage (text or gauge) and ship clock

pub mod anchor;
pub mod course;
pub mod distance;
pub mod environment;
pub mod nav;
pub mod position;
pub mod speed;
pub mod time;
pub mod vessel;
pub mod wind;

use std::fmt;
use std::str::FromStr;

use crate::instruction::{Formatter, RenderInstruction};
use crate::toolkit::Toolkit;
use crate::value::{RawProps, Value};

/// A mapper: pure translation of one props bag into an instruction
pub type TranslateFn = fn(&RawProps, &Toolkit<'_>) -> Option<RenderInstruction>;

/// The `(cluster, translate)` contract a mapper module exposes
#[derive(Debug, Clone)]
pub struct MapperModule {
    pub cluster: String,
    pub translate: Option<TranslateFn>,
}

impl MapperModule {
    pub fn new(cluster: impl Into<String>, translate: TranslateFn) -> Self {
        Self {
            cluster: cluster.into(),
            translate: Some(translate),
        }
    }
}

/// The built-in clusters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    CourseHeading,
    Speed,
    Position,
    Distance,
    Environment,
    Wind,
    Time,
    Nav,
    Anchor,
    Vessel,
}

impl Cluster {
    /// Registration order of the built-in registry. No duplicates.
    pub const ALL: [Cluster; 10] = [
        Cluster::CourseHeading,
        Cluster::Speed,
        Cluster::Position,
        Cluster::Distance,
        Cluster::Environment,
        Cluster::Wind,
        Cluster::Time,
        Cluster::Nav,
        Cluster::Anchor,
        Cluster::Vessel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Cluster::CourseHeading => "courseHeading",
            Cluster::Speed => "speed",
            Cluster::Position => "position",
            Cluster::Distance => "distance",
            Cluster::Environment => "environment",
            Cluster::Wind => "wind",
            Cluster::Time => "time",
            Cluster::Nav => "nav",
            Cluster::Anchor => "anchor",
            Cluster::Vessel => "vessel",
        }
    }

    pub fn translate_fn(self) -> TranslateFn {
        match self {
            Cluster::CourseHeading => course::translate,
            Cluster::Speed => speed::translate,
            Cluster::Position => position::translate,
            Cluster::Distance => distance::translate,
            Cluster::Environment => environment::translate,
            Cluster::Wind => wind::translate,
            Cluster::Time => time::translate,
            Cluster::Nav => nav::translate,
            Cluster::Anchor => anchor::translate,
            Cluster::Vessel => vessel::translate,
        }
    }

    pub fn module(self) -> MapperModule {
        MapperModule::new(self.as_str(), self.translate_fn())
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cluster::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
    }
}

/// Names of the built-in clusters in registration order
pub fn builtin_names() -> Vec<&'static str> {
    Cluster::ALL.iter().map(|c| c.as_str()).collect()
}

/// Module lookup for the built-in registry
pub fn lookup(name: &str) -> Option<MapperModule> {
    name.parse::<Cluster>().ok().map(Cluster::module)
}

// ============================================================================
// Shared helpers
// ============================================================================

/// `out(props[key], cap(kind), unit(kind), formatter, params)`
pub(crate) fn kind_out(
    tk: &Toolkit<'_>,
    kind: &str,
    key: &str,
    formatter: Option<Formatter>,
    params: Option<Vec<Value>>,
) -> RenderInstruction {
    tk.out(tk.value(key), tk.cap(kind), tk.unit(kind), formatter, params)
}

/// Formatter parameters for a 360° direction
pub(crate) fn direction_params(tk: &Toolkit<'_>) -> Option<Vec<Value>> {
    Some(vec![Value::Bool(tk.flag("leadingZero"))])
}

/// Formatter parameters for `formatDecimal`: integer digits, fraction digits, signed
pub(crate) fn decimal_params(integer_digits: i32, fraction_digits: i32, signed: bool) -> Option<Vec<Value>> {
    Some(vec![
        Value::from(integer_digits),
        Value::from(fraction_digits),
        Value::Bool(signed),
    ])
}

/// Formatter parameters carrying a resolved unit, `null` when none is configured
pub(crate) fn unit_params(unit: Option<&str>) -> Option<Vec<Value>> {
    Some(vec![Value::from(unit)])
}
