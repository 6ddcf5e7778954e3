//! Teardown fan-out over host-provided sub-renderers.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use navgauge::render::{Canvas, PaintProps, RecordingCanvas, RendererSpec, SubRenderer, TextRole, ValueFormatter};
use navgauge::{DispatchRegistry, InstrumentWidget, RenderError, RenderInstruction, RendererId, RendererRouter};

#[derive(Debug, Clone, Copy)]
enum Teardown {
    Ok,
    Fail,
    Panic,
}

struct Probe {
    label: &'static str,
    teardown: Teardown,
    finalized: Arc<AtomicUsize>,
}

impl Probe {
    fn new(label: &'static str, teardown: Teardown) -> (Self, Arc<AtomicUsize>) {
        let finalized = Arc::new(AtomicUsize::new(0));
        let probe = Self {
            label,
            teardown,
            finalized: Arc::clone(&finalized),
        };
        (probe, finalized)
    }
}

impl SubRenderer for Probe {
    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        _props: &PaintProps<'_>,
        _fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        let center = canvas.size() / 2.0;
        canvas.text(self.label, center, TextRole::Value);
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        self.finalized.fetch_add(1, Ordering::SeqCst);
        match self.teardown {
            Teardown::Ok => Ok(()),
            Teardown::Fail => Err(RenderError::Teardown {
                renderer: self.label.to_string(),
                message: "listener already detached".to_string(),
            }),
            Teardown::Panic => panic!("{} exploded", self.label),
        }
    }
}

/// Paints one label, then blows up
struct Exploding;

impl SubRenderer for Exploding {
    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        _props: &PaintProps<'_>,
        _fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        let center = canvas.size() / 2.0;
        canvas.text("partial", center, TextRole::Label);
        panic!("paint exploded");
    }
}

fn wind_instruction() -> RenderInstruction {
    RenderInstruction {
        caption: Some("TWA".into()),
        renderer: Some(RendererId::WindDial),
        ..Default::default()
    }
}

fn three_probes(middle: Teardown) -> (RendererRouter, [Arc<AtomicUsize>; 3]) {
    let (first, a) = Probe::new("first", Teardown::Ok);
    let (second, b) = Probe::new("second", middle);
    let (third, c) = Probe::new("third", Teardown::Ok);
    let router = RendererRouter::builder()
        .register(RendererId::SpeedGauge, RendererSpec::custom(first))
        .register(RendererId::DepthGauge, RendererSpec::custom(second))
        .register(RendererId::VoltageGauge, RendererSpec::custom(third))
        .build();
    (router, [a, b, c])
}

fn calls(counters: &[Arc<AtomicUsize>; 3]) -> [usize; 3] {
    counters.each_ref().map(|c| c.load(Ordering::SeqCst))
}

#[test]
fn failing_hook_does_not_stop_the_others() {
    let (mut router, counters) = three_probes(Teardown::Fail);
    let report = router.finalize();

    assert_eq!(calls(&counters), [1, 1, 1]);
    // the text renderer is added at the front by the builder
    assert_eq!(report.attempted, 4);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].renderer, RendererId::DepthGauge);
    assert_eq!(
        report.failures[0].error,
        RenderError::Teardown {
            renderer: "second".into(),
            message: "listener already detached".into(),
        }
    );
}

#[test]
fn panicking_hook_does_not_stop_the_others() {
    let (mut router, counters) = three_probes(Teardown::Panic);
    let report = router.finalize();

    assert_eq!(calls(&counters), [1, 1, 1]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(
        report.failures[0].error,
        RenderError::Panicked {
            renderer: "DepthGauge".into(),
            message: "second exploded".into(),
        }
    );
}

#[test]
fn clean_teardown_reports_no_failures() {
    let (mut router, counters) = three_probes(Teardown::Ok);
    assert!(router.finalize().is_clean());
    assert_eq!(calls(&counters), [1, 1, 1]);
}

#[test]
fn custom_renderer_is_routed_by_id() {
    let (mut router, _) = three_probes(Teardown::Ok);
    let mut canvas = RecordingCanvas::new(100.0, 100.0);
    let instruction = RenderInstruction {
        renderer: Some(RendererId::VoltageGauge),
        ..Default::default()
    };
    router.render_canvas(&mut canvas, &instruction).unwrap();
    assert_eq!(canvas.texts(), ["third"]);
}

#[test]
fn unregistered_renderer_falls_back_to_text() {
    let (mut router, _) = three_probes(Teardown::Ok);
    let instruction = RenderInstruction {
        caption: Some("TWA".into()),
        renderer: Some(RendererId::WindDial),
        ..Default::default()
    };
    assert_eq!(router.pick_renderer(&instruction), RendererId::ThreeValueText);

    let mut canvas = RecordingCanvas::new(100.0, 100.0);
    router.render_canvas(&mut canvas, &instruction).unwrap();
    assert_eq!(canvas.texts(), ["TWA"]);
    assert!(!router.wants_hide_native_head());
}

#[test]
fn panicking_paint_is_reported_as_error() {
    let mut router = RendererRouter::builder()
        .register(RendererId::WindDial, RendererSpec::custom(Exploding))
        .build();
    let mut canvas = RecordingCanvas::new(100.0, 100.0);
    let result = router.render_canvas(&mut canvas, &wind_instruction());
    assert_eq!(
        result,
        Err(RenderError::Panicked {
            renderer: "WindDial".into(),
            message: "paint exploded".into(),
        })
    );
    // whatever was painted before the panic stays on the canvas
    assert_eq!(canvas.texts(), ["partial"]);
}

#[test]
fn panicking_paint_does_not_reach_the_host() {
    let router = RendererRouter::builder()
        .register(RendererId::WindDial, RendererSpec::custom(Exploding))
        .build();
    let mut widget = InstrumentWidget::new(Arc::new(DispatchRegistry::builtin()), router);
    let mut canvas = RecordingCanvas::new(100.0, 100.0);

    let escaped = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        widget.render(&mut canvas, &wind_instruction());
    }))
    .is_err();
    assert!(!escaped);

    // the widget keeps painting afterwards
    canvas.reset();
    let text = RenderInstruction {
        caption: Some("SOG".into()),
        ..Default::default()
    };
    widget.render(&mut canvas, &text);
    assert_eq!(canvas.texts(), ["SOG"]);
    assert!(widget.finalize().is_clean());
}
