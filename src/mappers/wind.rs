//! Wind angle, direction and speed, plus the wind dial.
//!
//! Wind angles are relative bearings, so the text kinds arrive already
//! formatted as signed text and carry no formatter tag.

use crate::angle::DEFAULT_FALLBACK;
use crate::instruction::{Formatter, RenderInstruction, RendererId};
use crate::toolkit::Toolkit;
use crate::value::{RawProps, Value};

use super::{direction_params, kind_out, unit_params};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    match kind {
        "angleTrue" | "angleApparent" => {
            let bearing = tk.make_angle_formatter(false, tk.flag("leadingZero"), DEFAULT_FALLBACK);
            let text = bearing.format(&tk.value(kind).unwrap_or_default());
            Some(tk.out(Some(Value::Text(text)), tk.cap(kind), tk.unit(kind), None, None))
        }
        "directionTrue" => Some(kind_out(
            tk,
            kind,
            kind,
            Some(Formatter::Direction360),
            direction_params(tk),
        )),
        "speedTrue" | "speedApparent" => {
            let unit = tk.unit(kind);
            Some(kind_out(tk, kind, kind, Some(Formatter::Speed), unit_params(unit.as_deref())))
        }
        "angleTrueRadial" | "angleApparentRadial" => {
            let (angle, speed) = if kind == "angleTrueRadial" {
                ("angleTrue", "speedTrue")
            } else {
                ("angleApparent", "speedApparent")
            };
            let lay = tk.flag("windLayEnabled");
            let renderer_props = tk
                .renderer_props()
                .set("angle", tk.value(angle))
                .set("speed", tk.value(speed))
                .set_if(lay, "layMin", tk.value("windLayMin"))
                .set_if(lay, "layMax", tk.value("windLayMax"))
                .set("leadingZero", tk.value("leadingZero"))
                .build();
            Some(
                kind_out(tk, kind, angle, None, None)
                    .with_renderer(RendererId::WindDial, renderer_props),
            )
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(props: &RawProps) -> Option<RenderInstruction> {
        translate(props, &Toolkit::new(props))
    }

    #[test]
    fn angle_kinds_are_preformatted_signed_text() {
        let props = RawProps::new()
            .with("kind", "angleApparent")
            .with("angleApparent", 185.0)
            .with("caption_angleApparent", "AWA");
        let instr = run(&props).unwrap();
        assert_eq!(instr.value, Some(Value::from("-175")));
        assert_eq!(instr.caption.as_deref(), Some("AWA"));
        assert_eq!(instr.formatter, None);
        assert_eq!(instr.formatter_parameters, None);
    }

    #[test]
    fn missing_angle_shows_fallback() {
        let instr = run(&RawProps::new().with("kind", "angleTrue")).unwrap();
        assert_eq!(instr.value, Some(Value::from(DEFAULT_FALLBACK)));
    }

    #[test]
    fn direction_and_speed_kinds() {
        let dir = run(&RawProps::new().with("kind", "directionTrue").with("directionTrue", 270.0)).unwrap();
        assert_eq!(dir.formatter, Some(Formatter::Direction360));

        let speed = run(&RawProps::new()
            .with("kind", "speedTrue")
            .with("speedTrue", 14.0)
            .with("unit_speedTrue", "kn"))
        .unwrap();
        assert_eq!(speed.formatter, Some(Formatter::Speed));
        assert_eq!(speed.formatter_parameters, Some(vec![Value::from("kn")]));
    }

    #[test]
    fn radial_kind_gates_laylines() {
        let base = RawProps::new()
            .with("kind", "angleTrueRadial")
            .with("angleTrue", -40.0)
            .with("speedTrue", 12.5)
            .with("windLayMin", 30.0)
            .with("windLayMax", 50.0);

        let without = run(&base).unwrap();
        assert_eq!(without.renderer, Some(RendererId::WindDial));
        let rp = without.renderer_props.unwrap();
        assert_eq!(rp.get("angle"), Some(&Value::Number(-40.0)));
        assert_eq!(rp.get("speed"), Some(&Value::Number(12.5)));
        assert!(!rp.contains_key("layMin"));

        let with = run(&base.with("windLayEnabled", true)).unwrap();
        let rp = with.renderer_props.unwrap();
        assert_eq!(rp.get("layMin"), Some(&Value::Number(30.0)));
        assert_eq!(rp.get("layMax"), Some(&Value::Number(50.0)));
    }

    #[test]
    fn unknown_kind_is_none() {
        assert!(run(&RawProps::new().with("kind", "gust")).is_none());
    }
}
