//! Sub-renderer selection and lifecycle.
//!
//! This module is organized into submodules:
//! - `canvas`: the drawing surface trait and a recording implementation
//! - `context`: `PaintProps`, the merged instruction view handed to renderers
//! - `defaults`: built-in gauge ranges, steps and proportions
//! - `format`: formatter resolution (`ValueFormatter`)
//! - `geometry`: dial layout and value/angle mapping
//! - `text`, `dials`, `gauge`, `position`: the built-in sub-renderers
//!
//! [`RendererRouter`] owns one instance of every registered sub-renderer for
//! the lifetime of a widget, picks one per paint and fans teardown out to
//! all of them.

pub mod canvas;
pub mod context;
pub mod defaults;
pub mod dials;
pub mod format;
pub mod gauge;
pub mod geometry;
pub mod position;
pub mod text;

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use enum_dispatch::enum_dispatch;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas, TextRole, Tone};
pub use context::PaintProps;
pub use dials::{CompassGauge, WindDial};
pub use format::{DisplayFormatter, ValueFormatter};
pub use gauge::{DialGauge, GaugeKind};
pub use position::PositionCoordinates;
pub use text::ThreeValueText;

use crate::errors::{RenderError, TeardownFailure};
use crate::instruction::{RenderInstruction, RendererId};
use crate::log::{debug, warn};

/// Paint and teardown contract of a sub-renderer
#[enum_dispatch]
pub trait SubRenderer {
    /// Whether the widget should hide its own header while this renderer
    /// is registered
    fn wants_hide_native_head(&self) -> bool {
        false
    }

    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        props: &PaintProps<'_>,
        fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError>;

    /// Release per-widget state. Called once when the widget is unmounted.
    fn finalize(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}

/// The closed set of sub-renderer implementations
#[enum_dispatch(SubRenderer)]
pub enum RendererSpec {
    Text(ThreeValueText),
    Compass(CompassGauge),
    Wind(WindDial),
    Gauge(DialGauge),
    Position(PositionCoordinates),
    Custom(CustomRenderer),
}

impl RendererSpec {
    /// The built-in implementation for a renderer id
    pub fn builtin(id: RendererId) -> Self {
        match id {
            RendererId::ThreeValueText => ThreeValueText.into(),
            RendererId::CompassGauge => CompassGauge.into(),
            RendererId::WindDial => WindDial.into(),
            RendererId::SpeedGauge => DialGauge::new(GaugeKind::Speed).into(),
            RendererId::DepthGauge => DialGauge::new(GaugeKind::Depth).into(),
            RendererId::TemperatureGauge => DialGauge::new(GaugeKind::Temperature).into(),
            RendererId::VoltageGauge => DialGauge::new(GaugeKind::Voltage).into(),
            RendererId::PositionCoordinates => PositionCoordinates.into(),
        }
    }

    pub fn custom(renderer: impl SubRenderer + Send + 'static) -> Self {
        CustomRenderer::new(renderer).into()
    }
}

impl fmt::Debug for RendererSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererSpec::Text(r) => fmt::Debug::fmt(r, f),
            RendererSpec::Compass(r) => fmt::Debug::fmt(r, f),
            RendererSpec::Wind(r) => fmt::Debug::fmt(r, f),
            RendererSpec::Gauge(r) => fmt::Debug::fmt(r, f),
            RendererSpec::Position(r) => fmt::Debug::fmt(r, f),
            RendererSpec::Custom(r) => fmt::Debug::fmt(r, f),
        }
    }
}

/// A host-provided sub-renderer
pub struct CustomRenderer {
    inner: Box<dyn SubRenderer + Send>,
}

impl CustomRenderer {
    pub fn new(renderer: impl SubRenderer + Send + 'static) -> Self {
        Self {
            inner: Box::new(renderer),
        }
    }
}

impl fmt::Debug for CustomRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRenderer")
    }
}

impl SubRenderer for CustomRenderer {
    fn wants_hide_native_head(&self) -> bool {
        self.inner.wants_hide_native_head()
    }

    fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        props: &PaintProps<'_>,
        fmt: &dyn ValueFormatter,
    ) -> Result<(), RenderError> {
        self.inner.render_canvas(canvas, props, fmt)
    }

    fn finalize(&mut self) -> Result<(), RenderError> {
        self.inner.finalize()
    }
}

/// Outcome of a finalize fan-out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeardownReport {
    /// Number of hooks invoked
    pub attempted: usize,
    pub failures: Vec<TeardownFailure>,
}

impl TeardownReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct RendererRouter {
    entries: Vec<(RendererId, RendererSpec)>,
    formatter: Arc<dyn ValueFormatter>,
    hide_native_head: bool,
}

impl RendererRouter {
    /// Router with every built-in sub-renderer registered
    pub fn builtin(formatter: Arc<dyn ValueFormatter>) -> Self {
        RendererId::ALL
            .into_iter()
            .fold(Self::builder(), |b, id| b.register(id, RendererSpec::builtin(id)))
            .formatter(formatter)
            .build()
    }

    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    /// True if any registered sub-renderer asks for it. Fixed at construction.
    pub fn wants_hide_native_head(&self) -> bool {
        self.hide_native_head
    }

    /// Registered ids in registration order
    pub fn registered(&self) -> impl Iterator<Item = RendererId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn renderer(&self, id: RendererId) -> Option<&RendererSpec> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, spec)| spec)
    }

    /// The sub-renderer an instruction paints with. Unregistered or absent
    /// names fall back to the text renderer.
    pub fn pick_renderer(&self, instruction: &RenderInstruction) -> RendererId {
        let Some(id) = instruction.renderer else {
            return RendererId::ThreeValueText;
        };
        if self.renderer(id).is_some() {
            return id;
        }
        debug!(renderer = %id, "renderer not registered, using text");
        RendererId::ThreeValueText
    }

    /// Paint with the picked sub-renderer. A panicking renderer is caught
    /// and reported as [`RenderError::Panicked`].
    pub fn render_canvas(
        &mut self,
        canvas: &mut dyn Canvas,
        instruction: &RenderInstruction,
    ) -> Result<(), RenderError> {
        let id = self.pick_renderer(instruction);
        let props = PaintProps::new(instruction);
        let Some((_, spec)) = self.entries.iter_mut().find(|(i, _)| *i == id) else {
            return Ok(());
        };
        let formatter = self.formatter.as_ref();
        match panic::catch_unwind(AssertUnwindSafe(|| spec.render_canvas(canvas, &props, formatter))) {
            Ok(result) => result,
            Err(payload) => {
                let error = RenderError::Panicked {
                    renderer: id.to_string(),
                    message: panic_message(payload.as_ref()),
                };
                warn!(renderer = %id, %error, "sub-renderer panicked while painting");
                Err(error)
            }
        }
    }

    /// Run every teardown hook. A failing or panicking hook is recorded and
    /// the fan-out carries on with the next one.
    pub fn finalize(&mut self) -> TeardownReport {
        let mut report = TeardownReport::default();
        for (id, spec) in &mut self.entries {
            report.attempted += 1;
            let error = match panic::catch_unwind(AssertUnwindSafe(|| spec.finalize())) {
                Ok(Ok(())) => continue,
                Ok(Err(error)) => error,
                Err(payload) => RenderError::Panicked {
                    renderer: id.to_string(),
                    message: panic_message(payload.as_ref()),
                },
            };
            warn!(renderer = %id, %error, "teardown hook failed");
            report.failures.push(TeardownFailure {
                renderer: *id,
                error,
            });
        }
        report
    }
}

impl fmt::Debug for RendererRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererRouter")
            .field("entries", &self.entries)
            .field("hide_native_head", &self.hide_native_head)
            .finish_non_exhaustive()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[derive(Default)]
pub struct RouterBuilder {
    entries: Vec<(RendererId, RendererSpec)>,
    formatter: Option<Arc<dyn ValueFormatter>>,
}

impl RouterBuilder {
    /// Register a sub-renderer. Registering an id again replaces the
    /// earlier renderer in place.
    pub fn register(mut self, id: RendererId, spec: impl Into<RendererSpec>) -> Self {
        let spec = spec.into();
        match self.entries.iter_mut().find(|(i, _)| *i == id) {
            Some(entry) => entry.1 = spec,
            None => self.entries.push((id, spec)),
        }
        self
    }

    pub fn formatter(mut self, formatter: Arc<dyn ValueFormatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Finish the router. The text renderer is always present so that
    /// fallback selection has somewhere to go.
    pub fn build(mut self) -> RendererRouter {
        if !self.entries.iter().any(|(id, _)| *id == RendererId::ThreeValueText) {
            self.entries
                .insert(0, (RendererId::ThreeValueText, ThreeValueText.into()));
        }
        let hide_native_head = self
            .entries
            .iter()
            .any(|(_, spec)| spec.wants_hide_native_head());
        RendererRouter {
            entries: self.entries,
            formatter: self
                .formatter
                .unwrap_or_else(|| Arc::new(DisplayFormatter)),
            hide_native_head,
        }
    }
}
