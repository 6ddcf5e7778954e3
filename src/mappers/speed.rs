//! Speed over ground and speed through water.

use crate::instruction::{Formatter, RenderInstruction, RendererId};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

use super::{kind_out, unit_params};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    match kind {
        "sog" | "stw" => {
            let unit = tk.unit(kind);
            Some(kind_out(
                tk,
                kind,
                kind,
                Some(Formatter::Speed),
                unit_params(unit.as_deref()),
            ))
        }
        "sogRadial" | "stwRadial" => {
            let source = if kind == "sogRadial" { "sog" } else { "stw" };
            let unit = tk.unit(kind);
            Some(
                kind_out(
                    tk,
                    kind,
                    source,
                    Some(Formatter::Speed),
                    unit_params(unit.as_deref()),
                )
                .with_renderer(RendererId::SpeedGauge, tk.gauge_props("speed").build()),
            )
        }
        _ => None,
    }
}
