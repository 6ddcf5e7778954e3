//! Boat or waypoint position as a latitude/longitude pair.

use crate::instruction::{Formatter, RenderInstruction, RendererId};
use crate::toolkit::Toolkit;
use crate::value::{PropMap, RawProps};

use super::kind_out;

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    let source = match kind {
        "boat" => "position",
        "wp" => "wpPosition",
        _ => return None,
    };
    Some(
        kind_out(tk, kind, source, Some(Formatter::LonLats), None)
            .with_renderer(RendererId::PositionCoordinates, PropMap::new()),
    )
}
