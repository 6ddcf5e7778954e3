//! The externally visible widget: translate, render, finalize.

use std::sync::Arc;

use crate::dispatch::DispatchRegistry;
use crate::instruction::RenderInstruction;
use crate::log::warn;
use crate::render::{Canvas, DisplayFormatter, RendererRouter, TeardownReport, ValueFormatter};
use crate::value::RawProps;

/// One instrument widget.
///
/// The dispatch registry is immutable and may be shared between widgets.
/// The router, and the sub-renderer state inside it, belongs to this widget
/// and lives until [`InstrumentWidget::finalize`].
#[derive(Debug)]
pub struct InstrumentWidget {
    registry: Arc<DispatchRegistry>,
    router: RendererRouter,
}

impl InstrumentWidget {
    pub fn new(registry: Arc<DispatchRegistry>, router: RendererRouter) -> Self {
        Self { registry, router }
    }

    /// Built-in mappers and renderers with the plain display formatter
    pub fn builtin() -> Self {
        Self::with_formatter(Arc::new(DisplayFormatter))
    }

    /// Built-in mappers and renderers with a host formatter
    pub fn with_formatter(formatter: Arc<dyn ValueFormatter>) -> Self {
        Self::new(
            Arc::new(DispatchRegistry::builtin()),
            RendererRouter::builtin(formatter),
        )
    }

    pub fn translate(&self, props: &RawProps) -> RenderInstruction {
        self.registry.translate(props)
    }

    /// Paint an instruction. Failures are logged and the canvas is left as
    /// the failing renderer left it.
    pub fn render(&mut self, canvas: &mut dyn Canvas, instruction: &RenderInstruction) {
        if let Err(error) = self.router.render_canvas(canvas, instruction) {
            warn!(%error, renderer = ?instruction.renderer, "paint failed");
        }
    }

    /// Translate and paint in one step, returning the instruction used
    pub fn update(&mut self, canvas: &mut dyn Canvas, props: &RawProps) -> RenderInstruction {
        let instruction = self.translate(props);
        self.render(canvas, &instruction);
        instruction
    }

    /// Tear down every sub-renderer. Always completes.
    pub fn finalize(&mut self) -> TeardownReport {
        self.router.finalize()
    }

    pub fn wants_hide_native_head(&self) -> bool {
        self.router.wants_hide_native_head()
    }

    pub fn registry(&self) -> &Arc<DispatchRegistry> {
        &self.registry
    }

    pub fn router(&self) -> &RendererRouter {
        &self.router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::RendererId;
    use crate::render::RecordingCanvas;
    use crate::value::Value;

    #[test]
    fn widgets_share_one_registry() {
        let registry = Arc::new(DispatchRegistry::builtin());
        let a = InstrumentWidget::new(Arc::clone(&registry), RendererRouter::builder().build());
        let b = InstrumentWidget::new(Arc::clone(&registry), RendererRouter::builder().build());
        assert!(Arc::ptr_eq(a.registry(), b.registry()));
        assert!(!a.wants_hide_native_head());
    }

    #[test]
    fn paint_failure_is_swallowed() {
        let mut widget = InstrumentWidget::builtin();
        let props = RawProps::new()
            .with("cluster", "vessel")
            .with("kind", "voltageGraphic")
            .with("voltage", 12.0)
            .with("voltageMin", 15.0)
            .with("voltageMax", 10.0);
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        let instruction = widget.update(&mut canvas, &props);
        assert_eq!(instruction.renderer, Some(RendererId::VoltageGauge));
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn unknown_cluster_renders_nothing() {
        let mut widget = InstrumentWidget::builtin();
        let mut canvas = RecordingCanvas::new(100.0, 100.0);
        let instruction = widget.update(&mut canvas, &RawProps::new().with("cluster", "doesNotExist"));
        assert!(instruction.is_empty());
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn text_kinds_paint_the_triple() {
        let mut widget = InstrumentWidget::builtin();
        let props = RawProps::new()
            .with("cluster", "environment")
            .with("kind", "depth")
            .with("depth", Value::from("4.27"))
            .with("caption_depth", "DPT")
            .with("unit_depth", "m");
        let mut canvas = RecordingCanvas::new(120.0, 60.0);
        widget.update(&mut canvas, &props);
        assert_eq!(canvas.texts(), vec!["DPT", "4.3", "m"]);
    }

    #[test]
    fn finalize_reaches_every_renderer() {
        let mut widget = InstrumentWidget::builtin();
        let report = widget.finalize();
        assert!(report.is_clean());
        assert_eq!(report.attempted, RendererId::ALL.len());
    }
}
