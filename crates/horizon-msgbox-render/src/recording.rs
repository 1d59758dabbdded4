//! A renderer that records draw commands instead of rasterizing.
//!
//! Lets paint code be exercised headlessly: tests paint into a
//! [`RecordingRenderer`] and assert on the recorded command stream.

use crate::paint::Stroke;
use crate::renderer::{Renderer, TextOptions};
use crate::text::Font;
use crate::types::{Color, Point, Rect, RoundedRect};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    FillRoundedRect {
        rect: RoundedRect,
        color: Color,
    },
    StrokeRoundedRect {
        rect: RoundedRect,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        rect: Rect,
        color: Color,
        options: TextOptions,
    },
}

/// A [`Renderer`] that appends every call to a command list.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text drawn so far, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All lines drawn so far.
    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.commands
            .push(DrawCommand::FillRoundedRect { rect, color });
    }

    fn stroke_rounded_rect(&mut self, rect: RoundedRect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRoundedRect {
            rect,
            stroke: *stroke,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, rect: Rect, _font: &Font, color: Color, options: TextOptions) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            rect,
            color,
            options,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        renderer.draw_line(
            Point::ZERO,
            Point::new(10.0, 0.0),
            &Stroke::new(Color::BLACK, 1.0),
        );
        renderer.draw_text(
            "hi",
            Rect::new(0.0, 0.0, 10.0, 10.0),
            &Font::default(),
            Color::BLACK,
            TextOptions::message(),
        );

        assert_eq!(renderer.commands().len(), 3);
        assert_eq!(renderer.texts(), vec!["hi"]);
        assert_eq!(renderer.lines().len(), 1);

        renderer.clear();
        assert!(renderer.commands().is_empty());
    }
}
