//! Telemetry-to-render pipeline for marine instrument widgets.
//!
//! A host hands each widget a bag of raw properties per tick. The
//! [`DispatchRegistry`] routes the bag by its `cluster` to a mapper, which
//! switches on `kind` and produces a renderer-agnostic [`RenderInstruction`].
//! The [`RendererRouter`](render::RendererRouter) picks a sub-renderer for the
//! instruction and paints it on a [`Canvas`](render::Canvas). Dial-style
//! renderers lay out their graduations with [`build_tick_angles`].
//!
//! ```
//! use navgauge::{InstrumentWidget, RawProps};
//! use navgauge::render::RecordingCanvas;
//!
//! let mut widget = InstrumentWidget::builtin();
//! let props = RawProps::new()
//!     .with("cluster", "anchor")
//!     .with("kind", "distance")
//!     .with("anchorDistance", 42.0)
//!     .with("caption_distance", "ANCHOR")
//!     .with("unit_distance", "m");
//!
//! let instruction = widget.translate(&props);
//! let mut canvas = RecordingCanvas::new(120.0, 60.0);
//! widget.render(&mut canvas, &instruction);
//! assert_eq!(canvas.texts(), ["ANCHOR", "42.0", "m"]);
//! ```

use pest_derive::Parser;

pub mod angle;
pub mod dispatch;
pub mod errors;
pub mod instruction;
pub mod log;
pub mod mappers;
pub mod parse;
pub mod render;
pub mod ticks;
pub mod toolkit;
pub mod value;
pub mod widget;

pub use angle::{AngleFormatter, DEFAULT_FALLBACK, make_angle_formatter, normalize180, normalize360};
pub use dispatch::DispatchRegistry;
pub use errors::{PropsError, RegistryError, RenderError, TeardownFailure};
pub use instruction::{Formatter, RenderInstruction, RendererId};
pub use mappers::{Cluster, MapperModule, TranslateFn};
pub use parse::{parse_props, parse_props_named};
pub use render::{RendererRouter, TeardownReport};
pub use ticks::{MAX_TICK_STEPS, MajorMode, Sweep, TickAngles, TickConfig, build_tick_angles, compute_sweep};
pub use toolkit::{PropMapBuilder, Toolkit};
pub use value::{PropMap, RawProps, Value};
pub use widget::InstrumentWidget;

#[derive(Parser)]
#[grammar = "props.pest"]
pub struct PropsParser;
