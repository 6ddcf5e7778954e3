//! Dial gauges for linear quantities: speed, depth, temperature, voltage.
//!
//! The value range is mapped onto a fixed sweep. Ticks come from the tick
//! engine in relative mode, so majors line up with the range start even when
//! the range does not begin at a multiple of the major step.

use crate::errors::RenderError;
use crate::instruction::RendererId;
use crate::ticks::{MajorMode, TickAngles, TickConfig, build_tick_angles};

use super::canvas::{Canvas, TextRole, Tone};
use super::context::PaintProps;
use super::defaults::{self, GaugeDefaults, ThresholdSide};
use super::format::ValueFormatter;
use super::geometry::{DialLayout, angle_to_value, format_tick_label, value_to_angle};
use super::SubRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeKind {
    Speed,
    Depth,
    Temperature,
    Voltage,
}

impl GaugeKind {
    pub fn defaults(self) -> GaugeDefaults {
        match self {
            GaugeKind::Speed => defaults::SPEED,
            GaugeKind::Depth => defaults::DEPTH,
            GaugeKind::Temperature => defaults::TEMPERATURE,
            GaugeKind::Voltage => defaults::VOLTAGE,
        }
    }

    pub fn renderer_id(self) -> RendererId {
        match self {
            GaugeKind::Speed => RendererId::SpeedGauge,
            GaugeKind::Depth => RendererId::DepthGauge,
            GaugeKind::Temperature => RendererId::TemperatureGauge,
            GaugeKind::Voltage => RendererId::VoltageGauge,
        }
    }
}

/// Resolved range and steps for one paint
#[derive(Debug, Clone, Copy, PartialEq)]
struct Scale {
    min: f64,
    max: f64,
    tick_major: f64,
    tick_minor: f64,
}

impl Scale {
    fn resolve(props: &PaintProps<'_>, fallback: GaugeDefaults) -> Result<Self, RenderError> {
        let min = props.number("minValue").unwrap_or(fallback.min);
        let max = props.number("maxValue").unwrap_or(fallback.max);
        if max <= min {
            return Err(RenderError::InvalidRange { min, max });
        }
        Ok(Self {
            min,
            max,
            tick_major: props.number("tickMajor").unwrap_or(fallback.tick_major),
            tick_minor: props.number("tickMinor").unwrap_or(fallback.tick_minor),
        })
    }

    fn angle(&self, value: f64) -> f64 {
        value_to_angle(
            value,
            self.min,
            self.max,
            defaults::GAUGE_START_DEG,
            defaults::GAUGE_END_DEG,
        )
    }

    fn value(&self, deg: f64) -> f64 {
        angle_to_value(
            deg,
            self.min,
            self.max,
            defaults::GAUGE_START_DEG,
            defaults::GAUGE_END_DEG,
        )
    }

    fn tick_config(&self) -> TickConfig {
        let degrees_per_unit =
            (defaults::GAUGE_END_DEG - defaults::GAUGE_START_DEG) / (self.max - self.min);
        TickConfig::sweep(defaults::GAUGE_START_DEG, defaults::GAUGE_END_DEG)
            .steps(self.tick_major * degrees_per_unit, self.tick_minor * degrees_per_unit)
            .include_end(true)
            .major_mode(MajorMode::Relative)
    }
}

#[derive(Debug, Clone)]
pub struct DialGauge {
    kind: GaugeKind,
    memo: Option<(TickConfig, TickAngles)>,
}

impl DialGauge {
    pub fn new(kind: GaugeKind) -> Self {
        Self { kind, memo: None }
    }

    pub fn kind(&self) -> GaugeKind {
        self.kind
    }

    /// Whether a tick layout is cached from an earlier paint
    pub fn has_cached_ticks(&self) -> bool {
        self.memo.is_some()
    }

    fn ticks(&mut self, config: TickConfig) -> &TickAngles {
        let stale = !matches!(&self.memo, Some((cached, _)) if *cached == config);
        if stale {
            self.memo = None;
        }
        &self
            .memo
            .get_or_insert_with(|| (config, build_tick_angles(&config)))
            .1
    }

    fn sectors(&self, canvas: &mut dyn Canvas, layout: &DialLayout, props: &PaintProps<'_>, scale: &Scale) {
        let radius = layout.radius * defaults::SECTOR_RADIUS;
        // alarm is painted last so it covers the warning band it overlaps
        for (key, tone) in [("warningFrom", Tone::Warning), ("alarmFrom", Tone::Alarm)] {
            let Some(threshold) = props.number(key) else {
                continue;
            };
            let (from, to) = match self.kind.defaults().side {
                ThresholdSide::High => (threshold, scale.max),
                ThresholdSide::Low => (scale.min, threshold),
            };
            let (start, end) = (scale.angle(from), scale.angle(to));
            if end > start {
                canvas.arc(layout.center, radius, start, end, defaults::SECTOR_WIDTH, tone);
            }
        }
    }
}

impl SubRenderer for DialGauge {
    fn wants_hide_native_head(&self) -> bool {
        true
    }

    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        props: &PaintProps<'_>,
        fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        let scale = Scale::resolve(props, self.kind.defaults())?;
        let layout = DialLayout::fit(canvas.size())?;

        canvas.arc(
            layout.center,
            layout.radius,
            defaults::GAUGE_START_DEG,
            defaults::GAUGE_END_DEG,
            defaults::STROKE_WIDTH,
            Tone::Normal,
        );
        self.sectors(canvas, &layout, props, &scale);

        let ticks = self.ticks(scale.tick_config());
        for &deg in &ticks.minors {
            let (outer, inner) = layout.tick(deg, defaults::MINOR_TICK_LEN);
            canvas.line(outer, inner, defaults::MINOR_TICK_WIDTH, Tone::Normal);
        }
        for &deg in &ticks.majors {
            let (outer, inner) = layout.tick(deg, defaults::MAJOR_TICK_LEN);
            canvas.line(outer, inner, defaults::MAJOR_TICK_WIDTH, Tone::Normal);
            let label = format_tick_label(scale.value(deg));
            canvas.text(&label, layout.at(defaults::LABEL_RADIUS, deg), TextRole::Label);
        }

        let value = props.value();
        if let Some(reading) = props.number("value") {
            let deg = scale.angle(reading);
            canvas.line(
                layout.center,
                layout.at(defaults::POINTER_LEN, deg),
                defaults::POINTER_WIDTH,
                Tone::Marker,
            );
        }
        if let Some(caption) = props.caption() {
            canvas.text(caption, layout.at(0.35, 0.0), TextRole::Caption);
        }
        if let Some(value) = value {
            let text = fmt.format(props.formatter(), props.formatter_parameters(), value);
            canvas.text(&text, layout.at(0.35, 180.0), TextRole::Value);
        }
        if let Some(unit) = props.unit() {
            canvas.text(unit, layout.at(0.6, 180.0), TextRole::Unit);
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        self.memo = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{Formatter, RenderInstruction};
    use crate::render::canvas::{DrawCommand, RecordingCanvas};
    use crate::render::format::DisplayFormatter;
    use crate::value::{PropMap, Value};

    fn voltage(value: f64, overlay: &[(&str, f64)]) -> RenderInstruction {
        let renderer_props: PropMap = overlay
            .iter()
            .map(|(k, v)| (k.to_string(), Value::Number(*v)))
            .collect();
        RenderInstruction {
            value: Some(Value::Number(value)),
            caption: Some("BATT".into()),
            unit: Some("V".into()),
            formatter: Some(Formatter::Decimal),
            formatter_parameters: Some(vec![Value::from(3), Value::from(1), Value::Bool(true)]),
            renderer: Some(RendererId::VoltageGauge),
            renderer_props: Some(renderer_props),
        }
    }

    fn paint(gauge: &mut DialGauge, instr: &RenderInstruction) -> Result<RecordingCanvas, RenderError> {
        let mut canvas = RecordingCanvas::new(200.0, 200.0);
        gauge.render_canvas(&mut canvas, &PaintProps::new(instr), &DisplayFormatter)?;
        Ok(canvas)
    }

    fn arcs(canvas: &RecordingCanvas, tone: Tone) -> Vec<(f64, f64)> {
        canvas
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { start_deg, end_deg, tone: t, .. } if *t == tone => {
                    Some((*start_deg, *end_deg))
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn default_voltage_labels_cover_range() {
        let mut gauge = DialGauge::new(GaugeKind::Voltage);
        let canvas = paint(&mut gauge, &voltage(12.4, &[])).unwrap();
        assert_eq!(
            canvas.texts_with_role(TextRole::Label),
            vec!["7", "8", "9", "10", "11", "12", "13", "14", "15"]
        );
        assert_eq!(canvas.texts_with_role(TextRole::Value), vec!["12.4"]);
    }

    #[test]
    fn offset_range_uses_relative_majors() {
        let mut gauge = DialGauge::new(GaugeKind::Voltage);
        let instr = voltage(
            12.0,
            &[("minValue", 10.5), ("maxValue", 14.5), ("tickMajor", 1.0), ("tickMinor", 0.5)],
        );
        let canvas = paint(&mut gauge, &instr).unwrap();
        assert_eq!(
            canvas.texts_with_role(TextRole::Label),
            vec!["10.5", "11.5", "12.5", "13.5", "14.5"]
        );
    }

    #[test]
    fn low_side_sectors_start_at_min() {
        let mut gauge = DialGauge::new(GaugeKind::Voltage);
        let instr = voltage(
            12.4,
            &[("minValue", 10.0), ("maxValue", 14.0), ("warningFrom", 12.0), ("alarmFrom", 11.0)],
        );
        let canvas = paint(&mut gauge, &instr).unwrap();
        assert_eq!(arcs(&canvas, Tone::Warning), vec![(-120.0, 0.0)]);
        assert_eq!(arcs(&canvas, Tone::Alarm), vec![(-120.0, -60.0)]);
    }

    #[test]
    fn high_side_sectors_end_at_max() {
        let mut gauge = DialGauge::new(GaugeKind::Speed);
        let mut instr = voltage(4.0, &[("warningFrom", 15.0)]);
        instr.renderer = Some(RendererId::SpeedGauge);
        let canvas = paint(&mut gauge, &instr).unwrap();
        assert_eq!(arcs(&canvas, Tone::Warning), vec![(0.0, 120.0)]);
        assert!(arcs(&canvas, Tone::Alarm).is_empty());
    }

    #[test]
    fn pointer_is_clamped_to_range() {
        let mut gauge = DialGauge::new(GaugeKind::Depth);
        let canvas = paint(&mut gauge, &voltage(250.0, &[])).unwrap();
        let pointers = canvas.count(|c| matches!(c, DrawCommand::Line { tone: Tone::Marker, .. }));
        assert_eq!(pointers, 1);
        let end = canvas
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Line { to, tone: Tone::Marker, .. } => Some(*to),
                _ => None,
            })
            .unwrap();
        // clamped to +120°: right of centre, below the horizontal
        assert!(end.x > 100.0 && end.y > 100.0);
    }

    #[test]
    fn inverted_range_is_an_error() {
        let mut gauge = DialGauge::new(GaugeKind::Temperature);
        let err = paint(&mut gauge, &voltage(20.0, &[("minValue", 40.0), ("maxValue", 10.0)])).unwrap_err();
        assert_eq!(err, RenderError::InvalidRange { min: 40.0, max: 10.0 });
    }

    #[test]
    fn missing_value_draws_no_pointer() {
        let mut gauge = DialGauge::new(GaugeKind::Speed);
        let mut instr = voltage(0.0, &[]);
        instr.value = None;
        let canvas = paint(&mut gauge, &instr).unwrap();
        assert_eq!(canvas.count(|c| matches!(c, DrawCommand::Line { tone: Tone::Marker, .. })), 0);
        assert!(canvas.texts_with_role(TextRole::Value).is_empty());
    }

    #[test]
    fn ticks_are_memoized_until_finalize() {
        let mut gauge = DialGauge::new(GaugeKind::Voltage);
        assert!(!gauge.has_cached_ticks());
        let first = paint(&mut gauge, &voltage(12.0, &[])).unwrap();
        assert!(gauge.has_cached_ticks());
        let second = paint(&mut gauge, &voltage(12.0, &[])).unwrap();
        assert_eq!(first, second);

        gauge.finalize().unwrap();
        assert!(!gauge.has_cached_ticks());
    }

    #[test]
    fn changed_range_recomputes_ticks() {
        let mut gauge = DialGauge::new(GaugeKind::Voltage);
        paint(&mut gauge, &voltage(12.0, &[])).unwrap();
        let canvas = paint(&mut gauge, &voltage(12.0, &[("minValue", 10.0), ("maxValue", 14.0)])).unwrap();
        assert_eq!(
            canvas.texts_with_role(TextRole::Label),
            vec!["10", "11", "12", "13", "14"]
        );
    }
}
