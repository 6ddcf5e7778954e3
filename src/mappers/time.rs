//! Clock and date text. Time widgets are captionless.

use crate::instruction::{Formatter, RenderInstruction};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let formatter = match props.kind().unwrap_or("clock") {
        "clock" => Formatter::Time,
        "date" => Formatter::Date,
        "dateTime" => Formatter::DateTime,
        _ => return None,
    };
    Some(tk.out(tk.value("value"), None, None, Some(formatter), None))
}
