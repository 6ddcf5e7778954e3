//! Anchor distance, watch radius and bearing to the anchor.

use crate::instruction::{Formatter, RenderInstruction};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

use super::{direction_params, kind_out, unit_params};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    let distance_key = match kind {
        "distance" => "anchorDistance",
        "watch" => "anchorWatch",
        "bearing" => {
            return Some(kind_out(
                tk,
                kind,
                "anchorDirection",
                Some(Formatter::Direction360),
                direction_params(tk),
            ));
        }
        _ => return None,
    };
    let unit = tk.unit(kind);
    Some(kind_out(
        tk,
        kind,
        distance_key,
        Some(Formatter::Distance),
        unit_params(unit.as_deref()),
    ))
}
