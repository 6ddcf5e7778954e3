//! Per-translate helper bundle handed to every mapper.
//!
//! A `Toolkit` borrows the props of a single translate call and never
//! outlives it. It owns the omit-if-absent rule: renderers tell "field
//! absent, use your own default" apart from "field present but falsy", so
//! no helper here ever writes a key for a missing value.

use crate::angle::{AngleFormatter, make_angle_formatter};
use crate::instruction::{Formatter, RenderInstruction};
use crate::value::{PropMap, RawProps, Value};

pub struct Toolkit<'a> {
    props: &'a RawProps,
}

impl<'a> Toolkit<'a> {
    pub fn new(props: &'a RawProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &'a RawProps {
        self.props
    }

    /// Configured caption for a kind (`caption_<kind>`)
    pub fn cap(&self, kind: &str) -> Option<String> {
        self.configured(&format!("caption_{kind}"))
    }

    /// Configured unit for a kind (`unit_<kind>`)
    pub fn unit(&self, kind: &str) -> Option<String> {
        self.configured(&format!("unit_{kind}"))
    }

    fn configured(&self, key: &str) -> Option<String> {
        match self.props.get(key)? {
            Value::Text(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// A raw field, cloned out of the props
    pub fn value(&self, key: &str) -> Option<Value> {
        self.props.get(key).cloned()
    }

    pub fn flag(&self, key: &str) -> bool {
        self.props.flag(key)
    }

    /// Assemble an instruction, leaving every absent argument out
    pub fn out(
        &self,
        value: Option<Value>,
        caption: Option<String>,
        unit: Option<String>,
        formatter: Option<Formatter>,
        formatter_parameters: Option<Vec<Value>>,
    ) -> RenderInstruction {
        RenderInstruction {
            value,
            caption,
            unit,
            formatter,
            formatter_parameters,
            renderer: None,
            renderer_props: None,
        }
    }

    pub fn make_angle_formatter(
        &self,
        is_direction: bool,
        leading_zero: bool,
        fallback: impl Into<String>,
    ) -> AngleFormatter {
        make_angle_formatter(is_direction, leading_zero, fallback)
    }

    /// Start a `rendererProps` map
    pub fn renderer_props(&self) -> PropMapBuilder {
        PropMapBuilder::default()
    }

    /// Shared dial gauge settings read from `<prefix>Min`, `<prefix>Max`,
    /// `<prefix>TickMajor`, `<prefix>TickMinor` and the gated
    /// `<prefix>WarningFrom` / `<prefix>AlarmFrom` thresholds.
    ///
    /// A threshold is only included when its `<prefix>WarningEnabled` /
    /// `<prefix>AlarmEnabled` flag is set.
    pub fn gauge_props(&self, prefix: &str) -> PropMapBuilder {
        let key = |suffix: &str| format!("{prefix}{suffix}");
        self.renderer_props()
            .set("minValue", self.value(&key("Min")))
            .set("maxValue", self.value(&key("Max")))
            .set("tickMajor", self.value(&key("TickMajor")))
            .set("tickMinor", self.value(&key("TickMinor")))
            .set_if(
                self.flag(&key("WarningEnabled")),
                "warningFrom",
                self.value(&key("WarningFrom")),
            )
            .set_if(
                self.flag(&key("AlarmEnabled")),
                "alarmFrom",
                self.value(&key("AlarmFrom")),
            )
    }
}

/// Builds a `PropMap` that never contains keys for absent values
#[derive(Debug, Clone, Default)]
pub struct PropMapBuilder {
    map: PropMap,
}

impl PropMapBuilder {
    pub fn set(mut self, key: &str, value: Option<Value>) -> Self {
        if let Some(value) = value {
            self.map.insert(key.to_string(), value);
        }
        self
    }

    pub fn set_if(self, enabled: bool, key: &str, value: Option<Value>) -> Self {
        if enabled { self.set(key, value) } else { self }
    }

    pub fn build(self) -> PropMap {
        self.map
    }
}
