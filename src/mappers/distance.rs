//! Distances. The kind names the field that holds the value.

use crate::instruction::{Formatter, RenderInstruction};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

use super::{kind_out, unit_params};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    match kind {
        "dst" | "rteDistance" | "xte" => Some(kind_out(tk, kind, kind, Some(Formatter::Distance), None)),
        // the distance formatter needs the unit to pick metric or imperial subdivision
        "anchor" | "watch" => {
            let unit = tk.unit(kind);
            Some(kind_out(
                tk,
                kind,
                kind,
                Some(Formatter::Distance),
                unit_params(unit.as_deref()),
            ))
        }
        _ => None,
    }
}
