//! Round dials for angular readings: the heading compass and the wind dial

use glam::DVec2;

use crate::angle::{DEFAULT_FALLBACK, make_angle_formatter, normalize180};
use crate::errors::RenderError;
use crate::instruction::Formatter;
use crate::ticks::{TickConfig, build_tick_angles};
use crate::value::Value;

use super::canvas::{Canvas, TextRole, Tone};
use super::context::PaintProps;
use super::defaults;
use super::format::ValueFormatter;
use super::geometry::DialLayout;
use super::SubRenderer;

const CARDINALS: [(f64, &str); 4] = [(0.0, "N"), (90.0, "E"), (180.0, "S"), (270.0, "W")];

fn draw_ticks(canvas: &mut dyn Canvas, layout: &DialLayout, config: &TickConfig, rotation: f64) {
    let ticks = build_tick_angles(config);
    for &deg in &ticks.minors {
        let (outer, inner) = layout.tick(deg - rotation, defaults::MINOR_TICK_LEN);
        canvas.line(outer, inner, defaults::MINOR_TICK_WIDTH, Tone::Normal);
    }
    for &deg in &ticks.majors {
        let (outer, inner) = layout.tick(deg - rotation, defaults::MAJOR_TICK_LEN);
        canvas.line(outer, inner, defaults::MAJOR_TICK_WIDTH, Tone::Normal);
    }
}

/// Small triangle on the rim pointing at the dial centre
fn rim_marker(layout: &DialLayout, deg: f64) -> [DVec2; 3] {
    [
        layout.at(1.0, deg - 4.0),
        layout.at(1.0, deg + 4.0),
        layout.at(1.0 - defaults::MAJOR_TICK_LEN, deg),
    ]
}

fn corner_texts(canvas: &mut dyn Canvas, layout: &DialLayout, props: &PaintProps<'_>) {
    if let Some(caption) = props.caption() {
        canvas.text(caption, layout.at(0.35, 0.0), TextRole::Caption);
    }
    if let Some(unit) = props.unit() {
        canvas.text(unit, layout.at(0.6, 180.0), TextRole::Unit);
    }
}

/// Rotating compass card with a fixed lubber line at the top
#[derive(Debug, Clone, Copy, Default)]
pub struct CompassGauge;

impl SubRenderer for CompassGauge {
    fn wants_hide_native_head(&self) -> bool {
        true
    }

    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        props: &PaintProps<'_>,
        _fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        let layout = DialLayout::fit(canvas.size())?;
        let heading = props.number("heading").or_else(|| props.number("value"));
        // without a heading the card stays north-up
        let rotation = heading.unwrap_or(0.0);

        canvas.arc(layout.center, layout.radius, 0.0, 360.0, defaults::STROKE_WIDTH, Tone::Normal);
        let config = TickConfig::sweep(0.0, 360.0).steps(
            props.number("tickMajor").unwrap_or(defaults::COMPASS_TICK_MAJOR),
            props.number("tickMinor").unwrap_or(defaults::COMPASS_TICK_MINOR),
        );
        draw_ticks(canvas, &layout, &config, rotation);
        for (deg, label) in CARDINALS {
            canvas.text(label, layout.at(defaults::LABEL_RADIUS, deg - rotation), TextRole::Label);
        }

        canvas.polygon(&rim_marker(&layout, 0.0), Tone::Normal);
        if let Some(course) = props.number("markerCourse") {
            canvas.polygon(&rim_marker(&layout, course - rotation), Tone::Marker);
        }

        let direction = make_angle_formatter(true, props.flag("leadingZero"), DEFAULT_FALLBACK);
        let text = match heading {
            Some(deg) => direction.format_degrees(deg),
            None => direction.fallback().to_string(),
        };
        canvas.text(&text, layout.center, TextRole::Value);
        corner_texts(canvas, &layout, props);
        Ok(())
    }
}

/// Boat-fixed wind dial: 0° is the bow, starboard is clockwise
#[derive(Debug, Clone, Copy, Default)]
pub struct WindDial;

impl WindDial {
    fn laylines(canvas: &mut dyn Canvas, layout: &DialLayout, props: &PaintProps<'_>) {
        let (min, max) = match (props.number("layMin"), props.number("layMax")) {
            (None, None) => return,
            (min, max) => (
                min.unwrap_or(defaults::WIND_LAY_MIN).abs(),
                max.unwrap_or(defaults::WIND_LAY_MAX).abs(),
            ),
        };
        let (lo, hi) = (min.min(max), min.max(max));
        let radius = layout.radius * defaults::SECTOR_RADIUS;
        canvas.arc(layout.center, radius, lo, hi, defaults::SECTOR_WIDTH, Tone::Starboard);
        canvas.arc(layout.center, radius, -hi, -lo, defaults::SECTOR_WIDTH, Tone::Port);
    }
}

impl SubRenderer for WindDial {
    fn wants_hide_native_head(&self) -> bool {
        true
    }

    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        props: &PaintProps<'_>,
        fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        let layout = DialLayout::fit(canvas.size())?;

        canvas.arc(layout.center, layout.radius, -180.0, 180.0, defaults::STROKE_WIDTH, Tone::Normal);
        Self::laylines(canvas, &layout, props);

        let config = TickConfig::sweep(-180.0, 180.0)
            .steps(defaults::WIND_TICK_MAJOR, defaults::WIND_TICK_MINOR);
        draw_ticks(canvas, &layout, &config, 0.0);
        for deg in build_tick_angles(&config).majors {
            let label = format!("{}", normalize180(deg).abs().round() as i64);
            canvas.text(&label, layout.at(defaults::LABEL_RADIUS, deg), TextRole::Label);
        }

        let angle = props.number("angle").or_else(|| props.number("value"));
        if let Some(deg) = angle {
            canvas.line(
                layout.center,
                layout.at(defaults::POINTER_LEN, deg),
                defaults::POINTER_WIDTH,
                Tone::Marker,
            );
        }

        let bearing = make_angle_formatter(false, props.flag("leadingZero"), DEFAULT_FALLBACK);
        let text = match angle {
            Some(deg) => bearing.format_degrees(deg),
            None => bearing.fallback().to_string(),
        };
        canvas.text(&text, layout.center, TextRole::Value);

        if let Some(speed) = props.get("speed") {
            let params = props.unit().map(Value::from).into_iter().collect::<Vec<_>>();
            let text = fmt.format(Some(Formatter::Speed), &params, speed);
            canvas.text(&text, layout.at(0.35, 180.0), TextRole::Label);
        }
        corner_texts(canvas, &layout, props);
        Ok(())
    }
}
