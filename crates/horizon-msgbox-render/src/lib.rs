//! Rendering and text-measurement contracts for Horizon MsgBox.
//!
//! The dialog layer does not paint pixels or shape glyphs itself; both are
//! platform services. This crate defines the contracts the dialog calls:
//!
//! - Geometry and color primitives: [`Point`], [`Size`], [`Rect`],
//!   [`RoundedRect`], [`Color`], [`Stroke`]
//! - [`Renderer`]: the painting surface widgets draw onto
//! - [`Font`] and [`TextMeasurer`]: the text measurement seam, with
//!   [`MetricTextMeasurer`] as a deterministic built-in implementation
//! - [`RecordingRenderer`]: a renderer that records draw commands, for
//!   headless verification of paint code

mod paint;
mod recording;
mod renderer;
mod text;
mod types;

pub use paint::Stroke;
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{Renderer, TextOptions};
pub use text::{Font, FontFamily, MetricTextMeasurer, TextMeasurer};
pub use types::{Color, CornerRadii, Point, Rect, RoundedRect, Size};
