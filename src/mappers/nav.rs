//! Waypoint and route navigation values.

use crate::instruction::{Formatter, RenderInstruction};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

use super::{kind_out, unit_params};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    match kind {
        "eta" | "rteEta" => Some(kind_out(tk, kind, kind, Some(Formatter::Time), None)),
        "dst" | "rteDistance" | "xte" => Some(kind_out(tk, kind, kind, Some(Formatter::Distance), None)),
        "vmg" => {
            let unit = tk.unit(kind);
            Some(kind_out(tk, kind, kind, Some(Formatter::Speed), unit_params(unit.as_deref())))
        }
        "wpName" => Some(kind_out(tk, kind, kind, None, None)),
        _ => None,
    }
}
