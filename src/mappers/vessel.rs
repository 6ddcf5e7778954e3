//! Battery voltage as text or gauge, and the ship's clock.

use crate::instruction::{Formatter, RenderInstruction, RendererId};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

use super::{decimal_params, kind_out};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    match kind {
        "voltage" => Some(kind_out(
            tk,
            kind,
            "voltage",
            Some(Formatter::Decimal),
            decimal_params(3, 1, true),
        )),
        "voltageGraphic" => Some(
            kind_out(
                tk,
                kind,
                "voltage",
                Some(Formatter::Decimal),
                decimal_params(3, 1, true),
            )
            .with_renderer(RendererId::VoltageGauge, tk.gauge_props("voltage").build()),
        ),
        "clock" => Some(kind_out(tk, kind, "clock", Some(Formatter::Time), None)),
        _ => None,
    }
}
