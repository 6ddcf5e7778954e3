//! Caption / value / unit text triple, the default sub-renderer

use glam::dvec2;

use crate::errors::RenderError;

use super::canvas::{Canvas, TextRole};
use super::context::PaintProps;
use super::defaults::TEXT_PAD;
use super::format::ValueFormatter;
use super::SubRenderer;

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeValueText;

impl SubRenderer for ThreeValueText {
    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        props: &PaintProps<'_>,
        fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        let size = canvas.size();
        if let Some(caption) = props.caption() {
            canvas.text(caption, dvec2(TEXT_PAD, TEXT_PAD), TextRole::Caption);
        }
        if let Some(value) = props.value() {
            let text = fmt.format(props.formatter(), props.formatter_parameters(), value);
            canvas.text(&text, size / 2.0, TextRole::Value);
        }
        if let Some(unit) = props.unit() {
            canvas.text(unit, size - dvec2(TEXT_PAD, TEXT_PAD), TextRole::Unit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{Formatter, RenderInstruction};
    use crate::render::canvas::RecordingCanvas;
    use crate::render::format::DisplayFormatter;
    use crate::value::Value;

    fn paint(instr: &RenderInstruction) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new(120.0, 60.0);
        ThreeValueText
            .render_canvas(&mut canvas, &PaintProps::new(instr), &DisplayFormatter)
            .unwrap();
        canvas
    }

    #[test]
    fn paints_all_three_fields() {
        let instr = RenderInstruction {
            value: Some(Value::Number(6.24)),
            caption: Some("SOG".into()),
            unit: Some("kn".into()),
            formatter: Some(Formatter::Speed),
            ..Default::default()
        };
        let canvas = paint(&instr);
        assert_eq!(canvas.texts(), vec!["SOG", "6.2", "kn"]);
        assert_eq!(canvas.texts_with_role(TextRole::Value), vec!["6.2"]);
    }

    #[test]
    fn empty_instruction_paints_nothing() {
        assert!(paint(&RenderInstruction::empty()).commands().is_empty());
    }

    #[test]
    fn absent_fields_are_skipped() {
        let instr = RenderInstruction {
            caption: Some(String::new()),
            ..Default::default()
        };
        let canvas = paint(&instr);
        assert_eq!(canvas.texts(), vec![""]);
    }
}
