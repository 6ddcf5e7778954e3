//! Depth below transducer, water temperature and air pressure.

use crate::instruction::{Formatter, RenderInstruction, RendererId};
use crate::toolkit::Toolkit;
use crate::value::RawProps;

use super::{decimal_params, kind_out};

pub fn translate(props: &RawProps, tk: &Toolkit<'_>) -> Option<RenderInstruction> {
    let kind = props.kind()?;
    match kind {
        "depth" | "temp" => Some(kind_out(tk, kind, kind, Some(Formatter::Decimal), decimal_params(3, 1, true))),
        "pressure" => Some(kind_out(tk, kind, kind, Some(Formatter::Decimal), decimal_params(4, 0, false))),
        "depthRadial" => Some(
            kind_out(tk, kind, "depth", Some(Formatter::Decimal), decimal_params(3, 1, true))
                .with_renderer(RendererId::DepthGauge, tk.gauge_props("depth").build()),
        ),
        "tempRadial" => Some(
            kind_out(tk, kind, "temp", Some(Formatter::Decimal), decimal_params(3, 1, true))
                .with_renderer(RendererId::TemperatureGauge, tk.gauge_props("temp").build()),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn run(props: &RawProps) -> Option<RenderInstruction> {
        translate(props, &Toolkit::new(props))
    }

    #[test]
    fn depth_text_uses_signed_decimal() {
        let props = RawProps::new().with("kind", "depth").with("depth", 4.25);
        let instr = run(&props).unwrap();
        assert_eq!(instr.formatter, Some(Formatter::Decimal));
        assert_eq!(
            instr.formatter_parameters,
            Some(vec![Value::Number(3.0), Value::Number(1.0), Value::Bool(true)])
        );
    }

    #[test]
    fn pressure_is_unsigned_integer() {
        let props = RawProps::new().with("kind", "pressure").with("pressure", 1013.2);
        let instr = run(&props).unwrap();
        assert_eq!(
            instr.formatter_parameters,
            Some(vec![Value::Number(4.0), Value::Number(0.0), Value::Bool(false)])
        );
    }

    #[test]
    fn radial_kinds_select_gauges() {
        let depth = run(&RawProps::new()
            .with("kind", "depthRadial")
            .with("depth", 3.1)
            .with("depthAlarmEnabled", true)
            .with("depthAlarmFrom", 2.0))
        .unwrap();
        assert_eq!(depth.renderer, Some(RendererId::DepthGauge));
        assert_eq!(depth.value, Some(Value::Number(3.1)));
        assert_eq!(
            depth.renderer_props.unwrap().get("alarmFrom"),
            Some(&Value::Number(2.0))
        );

        let temp = run(&RawProps::new().with("kind", "tempRadial").with("tempMax", 40.0)).unwrap();
        assert_eq!(temp.renderer, Some(RendererId::TemperatureGauge));
        assert_eq!(temp.value, None);
    }

    #[test]
    fn unknown_kind_is_none() {
        assert!(run(&RawProps::new().with("kind", "humidity")).is_none());
    }
}
