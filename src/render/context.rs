//! Paint context - the merged view of an instruction a sub-renderer reads

use crate::instruction::{Formatter, RenderInstruction};
use crate::value::{PropMap, Value};

/// An instruction overlaid with its own `rendererProps`.
///
/// Lookups consult `rendererProps` first and fall back to the base
/// instruction fields, so a renderer-specific key wins on collision.
#[derive(Debug, Clone, Copy)]
pub struct PaintProps<'a> {
    instruction: &'a RenderInstruction,
    overlay: Option<&'a PropMap>,
}

impl<'a> PaintProps<'a> {
    pub fn new(instruction: &'a RenderInstruction) -> Self {
        Self {
            instruction,
            overlay: instruction.renderer_props.as_ref(),
        }
    }

    pub fn instruction(&self) -> &'a RenderInstruction {
        self.instruction
    }

    fn overlay(&self, key: &str) -> Option<&'a Value> {
        self.overlay.and_then(|map| map.get(key))
    }

    pub fn value(&self) -> Option<&'a Value> {
        self.overlay("value").or(self.instruction.value.as_ref())
    }

    pub fn caption(&self) -> Option<&'a str> {
        self.overlay("caption")
            .and_then(Value::as_str)
            .or(self.instruction.caption.as_deref())
    }

    pub fn unit(&self) -> Option<&'a str> {
        self.overlay("unit")
            .and_then(Value::as_str)
            .or(self.instruction.unit.as_deref())
    }

    pub fn formatter(&self) -> Option<Formatter> {
        self.overlay("formatter")
            .and_then(Value::as_str)
            .and_then(|name| name.parse().ok())
            .or(self.instruction.formatter)
    }

    pub fn formatter_parameters(&self) -> &'a [Value] {
        self.overlay("formatterParameters")
            .and_then(Value::as_list)
            .or(self.instruction.formatter_parameters.as_deref())
            .unwrap_or(&[])
    }

    /// A renderer field; `value` falls back to the instruction value
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match key {
            "value" => self.value(),
            _ => self.overlay(key),
        }
    }

    /// Finite numeric field, numeric text coerced
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
    }

    pub fn flag(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_truthy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction() -> RenderInstruction {
        let mut overlay = PropMap::new();
        overlay.insert("unit".into(), Value::from("V"));
        overlay.insert("maxValue".into(), Value::from("15"));
        overlay.insert("formatter".into(), Value::from("formatSpeed"));
        RenderInstruction {
            value: Some(Value::Number(12.4)),
            caption: Some("BATT".into()),
            unit: Some("volt".into()),
            formatter: Some(Formatter::Decimal),
            formatter_parameters: Some(vec![Value::from(3)]),
            renderer: None,
            renderer_props: Some(overlay),
        }
    }

    #[test]
    fn overlay_wins_on_collision() {
        let instr = instruction();
        let props = PaintProps::new(&instr);
        assert_eq!(props.unit(), Some("V"));
        assert_eq!(props.caption(), Some("BATT"));
        assert_eq!(props.formatter(), Some(Formatter::Speed));
        assert_eq!(props.formatter_parameters(), &[Value::from(3)]);
    }

    #[test]
    fn numbers_coerce_text() {
        let instr = instruction();
        let props = PaintProps::new(&instr);
        assert_eq!(props.number("maxValue"), Some(15.0));
        assert_eq!(props.number("value"), Some(12.4));
        assert_eq!(props.number("minValue"), None);
    }

    #[test]
    fn empty_instruction_reads_nothing() {
        let instr = RenderInstruction::empty();
        let props = PaintProps::new(&instr);
        assert!(props.value().is_none());
        assert!(props.formatter_parameters().is_empty());
        assert!(!props.flag("leadingZero"));
    }
}
