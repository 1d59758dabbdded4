//! The painting surface widgets draw onto.

use crate::paint::Stroke;
use crate::text::Font;
use crate::types::{Color, Point, Rect, RoundedRect};

/// Formatting applied when a renderer draws text into a rectangle.
///
/// Mirrors the flags the dialog layer needs: word-wrap, end-ellipsis for
/// overflow, and mnemonic stripping (so `&OK` renders as `OK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    /// Break lines at word boundaries.
    pub word_wrap: bool,
    /// Replace clipped trailing text with an ellipsis.
    pub end_ellipsis: bool,
    /// Treat `&x` as a mnemonic marker rather than literal text.
    pub strip_mnemonics: bool,
}

impl TextOptions {
    /// Options for message body text: wrapped, ellipsized, literal `&`.
    pub fn message() -> Self {
        Self {
            word_wrap: true,
            end_ellipsis: true,
            strip_mnemonics: false,
        }
    }

    /// Options for button labels: single line, mnemonics stripped.
    pub fn label() -> Self {
        Self {
            word_wrap: false,
            end_ellipsis: false,
            strip_mnemonics: true,
        }
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            word_wrap: false,
            end_ellipsis: false,
            strip_mnemonics: false,
        }
    }
}

/// Drawing operations used by the dialog's paint code.
///
/// A production embedding backs this with the platform's 2D surface; tests
/// use [`RecordingRenderer`](crate::RecordingRenderer).
pub trait Renderer {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Fill a rounded rectangle with a solid color.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke);

    /// Draw a straight line.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw text into a rectangle.
    fn draw_text(&mut self, text: &str, rect: Rect, font: &Font, color: Color, options: TextOptions);
}
