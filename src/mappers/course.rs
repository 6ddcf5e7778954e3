//! Course over ground, headings and bearing to waypoint.

use crate::instruction::{Formatter, RenderInstruction, RendererId};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

use super::{direction_params, kind_out};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    match kind {
        "cog" | "hdt" | "hdm" | "brg" => Some(kind_out(
            tk,
            kind,
            kind,
            Some(Formatter::Direction360),
            direction_params(tk),
        )),
        "hdtRadial" | "hdmRadial" => {
            let source = if kind == "hdtRadial" { "hdt" } else { "hdm" };
            let renderer_props = tk
                .renderer_props()
                .set("heading", tk.value(source))
                .set("markerCourse", tk.value("brg"))
                .set("tickMajor", tk.value("compassTickMajor"))
                .set("tickMinor", tk.value("compassTickMinor"))
                .set("leadingZero", tk.value("leadingZero"))
                .build();
            Some(
                kind_out(
                    tk,
                    kind,
                    source,
                    Some(Formatter::Direction360),
                    direction_params(tk),
                )
                .with_renderer(RendererId::CompassGauge, renderer_props),
            )
        }
        _ => None,
    }
}
