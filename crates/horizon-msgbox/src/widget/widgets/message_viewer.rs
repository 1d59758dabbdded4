//! Message presentation control: icon plus wrapped message text.
//!
//! Owns the dialog's preferred-size computation. Long single-line messages
//! are reshaped to a bounded width/height ratio so the user is not handed
//! a window wider than their neck can follow; the height is then rounded
//! up to whole text lines so the last line is never clipped.

use std::sync::Arc;

use horizon_msgbox_core::{Object, ObjectId};
use horizon_msgbox_render::{
    Color, Font, Point, Rect, Renderer, RoundedRect, Size, Stroke, TextMeasurer, TextOptions,
};

use crate::msgbox::MessageIcon;
use crate::widget::layout::ContentMargins;
use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

/// Gap between the icon and the text block.
pub const ICON_SPACING: f32 = 10.0;

/// Target width/height ratio for the text block.
///
/// Text measured wider than this is re-laid-out at the same area with this
/// ratio instead.
const PREFERRED_RATIO: f32 = 12.0;

/// Proposed bounds below this are treated as unbounded.
const SMALL_BOUND: f32 = 10.0;

/// Messages shorter than this are vertically centered against the icon.
const CENTER_TEXT_LIMIT: usize = 100;

/// Bottom separator color.
const SEPARATOR_COLOR: Color = Color::new(223.0 / 255.0, 223.0 / 255.0, 223.0 / 255.0, 1.0);

/// The message area of the dialog.
pub struct MessageViewer {
    base: WidgetBase,
    text: String,
    icon: MessageIcon,
    font: Font,
    padding: ContentMargins,
    measurer: Arc<dyn TextMeasurer>,
    /// Whether the 1px bottom separator is drawn.
    separator: bool,
}

impl MessageViewer {
    /// Create a viewer for the given message and icon.
    pub fn new(text: impl Into<String>, icon: MessageIcon, measurer: Arc<dyn TextMeasurer>) -> Self {
        Self {
            base: WidgetBase::new::<Self>(),
            text: text.into(),
            icon,
            font: Font::default(),
            padding: ContentMargins::new(21.0, 18.0, 21.0, 18.0),
            measurer,
            separator: true,
        }
    }

    /// The message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The icon.
    pub fn icon(&self) -> MessageIcon {
        self.icon
    }

    /// The content padding.
    pub fn padding(&self) -> ContentMargins {
        self.padding
    }

    /// Set whether the bottom separator is drawn.
    pub fn set_separator(&mut self, separator: bool) {
        if self.separator != separator {
            self.separator = separator;
            self.base.update();
        }
    }

    /// The viewer's minimum size: the icon column plus one text line.
    pub fn minimum_size(&self) -> Size {
        let icon = self.icon.display_size();
        Size::new(
            icon.width + self.padding.horizontal(),
            icon.height.max(self.measurer.line_height(&self.font)) + self.padding.vertical(),
        )
    }

    /// Compute the size this viewer wants, given the maximum size it may
    /// occupy.
    ///
    /// Bounds below a small threshold are treated as unbounded. The result
    /// is a pure function of the current text, icon and font; calling it
    /// repeatedly with the same input yields the same output.
    pub fn preferred_size(&self, proposed: Size) -> Size {
        let max_width = if proposed.width < SMALL_BOUND {
            f32::MAX
        } else {
            proposed.width
        };
        let max_height = if proposed.height < SMALL_BOUND {
            f32::MAX
        } else {
            proposed.height
        };

        let icon = self.icon.display_size();
        let icon_reserved = if self.icon.is_visible() {
            icon.width + ICON_SPACING
        } else {
            0.0
        };
        let reserved = self.padding.horizontal() + icon_reserved;

        let mut well = Size::ZERO;
        if !self.text.is_empty() {
            let measured = self
                .measurer
                .measure(&self.text, &self.font, max_width - reserved);

            // Reshape overly wide single-line blocks to the target ratio,
            // preserving area.
            well = if measured.height > 0.0 && measured.width / measured.height > PREFERRED_RATIO
            {
                same_area_with_ratio(measured, PREFERRED_RATIO)
            } else {
                measured
            };

            // Round up to whole lines so the last line is never clipped.
            let line_height = self.measurer.line_height(&self.font);
            let differ = well.height % line_height;
            if differ != 0.0 {
                well.height += line_height - differ;
            }
        }

        if self.icon.is_visible() {
            well.width += icon.width + ICON_SPACING;
            well.height = well.height.max(icon.height);
        }

        well.width += self.padding.horizontal();
        well.height += self.padding.vertical();

        // The width is already bounded by construction; the height is not.
        if well.height > max_height {
            well.height = max_height;
        }

        well
    }

    fn padded_rect(&self) -> Rect {
        let rect = self.base.rect();
        Rect::new(
            self.padding.left,
            self.padding.top,
            (rect.width() - self.padding.horizontal()).max(0.0),
            (rect.height() - self.padding.vertical()).max(0.0),
        )
    }

    // =========================================================================
    // Icon painting
    // =========================================================================

    fn paint_icon(&self, ctx: &mut PaintContext<'_>, rect: Rect) {
        let center = rect.center();
        let radius = rect.width() / 2.0 - 2.0;
        let color = icon_color(self.icon);

        match self.icon {
            MessageIcon::Information => {
                self.fill_circle(ctx, center, radius, color);
                self.draw_info_symbol(ctx, center, Color::WHITE);
            }
            MessageIcon::Warning => {
                self.fill_triangle(ctx, rect, color);
                self.draw_exclamation(ctx, center, Color::from_rgb8(40, 40, 40));
            }
            MessageIcon::Error => {
                self.fill_circle(ctx, center, radius, color);
                self.draw_x_symbol(ctx, center, radius * 0.5, Color::WHITE);
            }
            MessageIcon::Question => {
                self.fill_circle(ctx, center, radius, color);
                self.draw_question_symbol(ctx, center, Color::WHITE);
            }
            MessageIcon::None => {}
        }
    }

    fn fill_circle(&self, ctx: &mut PaintContext<'_>, center: Point, radius: f32, color: Color) {
        let rect = Rect::new(center.x - radius, center.y - radius, radius * 2.0, radius * 2.0);
        ctx.renderer()
            .fill_rounded_rect(RoundedRect::new(rect, radius), color);
    }

    fn fill_triangle(&self, ctx: &mut PaintContext<'_>, rect: Rect, color: Color) {
        // Horizontal-line fill; good enough for a 32px glyph.
        let cx = rect.center().x;
        let top = rect.top() + 2.0;
        let bottom = rect.bottom() - 2.0;
        let height = bottom - top;
        let stroke = Stroke::new(color, 1.0);

        for i in 0..=(height as i32) {
            let y = top + i as f32;
            let progress = i as f32 / height;
            let half_width = progress * (rect.width() / 2.0 - 2.0);
            ctx.renderer().draw_line(
                Point::new(cx - half_width, y),
                Point::new(cx + half_width, y),
                &stroke,
            );
        }
    }

    fn draw_info_symbol(&self, ctx: &mut PaintContext<'_>, center: Point, color: Color) {
        let stroke = Stroke::new(color, 2.5);
        let dot = Rect::new(center.x - 2.0, center.y - 8.0, 4.0, 4.0);
        ctx.renderer().fill_rounded_rect(RoundedRect::new(dot, 2.0), color);
        ctx.renderer().draw_line(
            Point::new(center.x, center.y - 1.0),
            Point::new(center.x, center.y + 8.0),
            &stroke,
        );
    }

    fn draw_exclamation(&self, ctx: &mut PaintContext<'_>, center: Point, color: Color) {
        let stroke = Stroke::new(color, 2.5);
        ctx.renderer().draw_line(
            Point::new(center.x, center.y - 6.0),
            Point::new(center.x, center.y + 2.0),
            &stroke,
        );
        let dot = Rect::new(center.x - 2.0, center.y + 5.0, 4.0, 4.0);
        ctx.renderer().fill_rounded_rect(RoundedRect::new(dot, 2.0), color);
    }

    fn draw_x_symbol(&self, ctx: &mut PaintContext<'_>, center: Point, half: f32, color: Color) {
        let stroke = Stroke::new(color, 2.5);
        ctx.renderer().draw_line(
            Point::new(center.x - half, center.y - half),
            Point::new(center.x + half, center.y + half),
            &stroke,
        );
        ctx.renderer().draw_line(
            Point::new(center.x + half, center.y - half),
            Point::new(center.x - half, center.y + half),
            &stroke,
        );
    }

    fn draw_question_symbol(&self, ctx: &mut PaintContext<'_>, center: Point, color: Color) {
        let stroke = Stroke::new(color, 2.5);
        let hook = [
            (Point::new(center.x - 4.0, center.y - 8.0), Point::new(center.x + 2.0, center.y - 10.0)),
            (Point::new(center.x + 2.0, center.y - 10.0), Point::new(center.x + 5.0, center.y - 6.0)),
            (Point::new(center.x + 5.0, center.y - 6.0), Point::new(center.x + 2.0, center.y - 2.0)),
            (Point::new(center.x + 2.0, center.y - 2.0), Point::new(center.x, center.y + 1.0)),
        ];
        for (from, to) in hook {
            ctx.renderer().draw_line(from, to, &stroke);
        }
        let dot = Rect::new(center.x - 2.0, center.y + 5.0, 4.0, 4.0);
        ctx.renderer().fill_rounded_rect(RoundedRect::new(dot, 2.0), color);
    }
}

/// Get a new size with the same area as `size` but a `ratio` width/height
/// proportion, rounded up.
fn same_area_with_ratio(size: Size, ratio: f32) -> Size {
    let area = size.width * size.height;
    let width = (area * ratio).sqrt();
    Size::new(width.ceil(), (area / width).ceil())
}

/// The fill color for each icon.
fn icon_color(icon: MessageIcon) -> Color {
    match icon {
        MessageIcon::None => Color::TRANSPARENT,
        MessageIcon::Information | MessageIcon::Question => Color::from_rgb8(0, 120, 215),
        MessageIcon::Warning => Color::from_rgb8(255, 185, 0),
        MessageIcon::Error => Color::from_rgb8(232, 17, 35),
    }
}

impl Object for MessageViewer {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for MessageViewer {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.preferred_size(Size::new(f32::MAX, f32::MAX)))
            .with_minimum(self.minimum_size())
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let full = ctx.rect();
        ctx.renderer().fill_rect(full, Color::WHITE);

        let mut rect = self.padded_rect();

        if self.icon.is_visible() {
            let icon_size = self.icon.display_size();
            let icon_rect = Rect::new(
                self.padding.left,
                self.padding.top,
                icon_size.width,
                icon_size.height,
            );
            self.paint_icon(ctx, icon_rect);

            rect = Rect::new(
                rect.left() + icon_size.width + ICON_SPACING,
                rect.top(),
                (rect.width() - icon_size.width - ICON_SPACING).max(0.0),
                rect.height(),
            );

            // Short messages sit vertically centered against the icon.
            if self.text.chars().count() < CENTER_TEXT_LIMIT {
                let text_size = self.measurer.measure(&self.text, &self.font, rect.width());
                if text_size.height <= icon_size.height {
                    rect = rect.offset(0.0, (icon_size.height - text_size.height) / 2.0);
                }
            }
        }

        ctx.renderer().draw_text(
            &self.text,
            rect,
            &self.font,
            Color::BLACK,
            TextOptions::message(),
        );

        if self.separator {
            let y = full.height() - 1.0;
            ctx.renderer().draw_line(
                Point::new(0.0, y),
                Point::new(full.width(), y),
                &Stroke::new(SEPARATOR_COLOR, 1.0),
            );
        }
    }

    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        // Purely presentational; input passes through.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_msgbox_core::init_global_registry;
    use horizon_msgbox_render::{DrawCommand, MetricTextMeasurer, RecordingRenderer};

    fn setup() {
        init_global_registry();
    }

    fn measurer() -> Arc<MetricTextMeasurer> {
        Arc::new(MetricTextMeasurer::default())
    }

    fn viewer(text: &str, icon: MessageIcon) -> MessageViewer {
        setup();
        MessageViewer::new(text, icon, measurer())
    }

    #[test]
    fn test_preferred_size_is_idempotent() {
        let viewer = viewer("The disk is full. Free some space and retry.", MessageIcon::Warning);
        let proposed = Size::new(700.0, 900.0);
        let first = viewer.preferred_size(proposed);
        let second = viewer.preferred_size(proposed);
        assert_eq!(first, second);
    }

    #[test]
    fn test_small_bounds_are_unbounded() {
        let viewer = viewer("Hi", MessageIcon::None);
        let bounded = viewer.preferred_size(Size::new(700.0, 900.0));
        let tiny = viewer.preferred_size(Size::new(0.0, 0.0));
        assert_eq!(bounded, tiny);
    }

    #[test]
    fn test_height_is_whole_lines() {
        let viewer = viewer(
            "A message long enough to wrap over several lines when the \
             width budget is modest, so the line rounding shows.",
            MessageIcon::None,
        );
        let size = viewer.preferred_size(Size::new(300.0, 900.0));

        let line_height = measurer().line_height(&Font::default());
        let text_height = size.height - viewer.padding().vertical();
        assert_eq!(text_height % line_height, 0.0);
    }

    #[test]
    fn test_wide_text_reshaped_to_ratio() {
        let long: String = "forty two ".repeat(60); // ~600 chars, one natural line
        let viewer = viewer(&long, MessageIcon::None);

        let unconstrained = measurer().measure(&long, &Font::default(), f32::MAX);
        assert!(unconstrained.width / unconstrained.height > 12.0);

        let size = viewer.preferred_size(Size::new(0.0, 0.0));
        let text_width = size.width - viewer.padding().horizontal();
        let text_height = size.height - viewer.padding().vertical();

        // Far narrower than the raw single line, and near the target ratio
        // (line rounding pushes the height up a little).
        assert!(text_width < unconstrained.width / 2.0);
        let ratio = text_width / text_height;
        assert!(ratio <= 12.5, "ratio {ratio} too wide");
        assert!(ratio >= 6.0, "ratio {ratio} too tall");

        // Area preserved within one extra line of rounding.
        let line_height = measurer().line_height(&Font::default());
        let area = unconstrained.width * unconstrained.height;
        let new_area = text_width * text_height;
        assert!(new_area >= area);
        assert!(new_area <= area + (line_height + 1.0) * text_width);
    }

    #[test]
    fn test_icon_reserves_width_and_height() {
        let without = viewer("Hi", MessageIcon::None).preferred_size(Size::new(700.0, 900.0));
        let with = viewer("Hi", MessageIcon::Information).preferred_size(Size::new(700.0, 900.0));

        assert_eq!(with.width, without.width + 32.0 + ICON_SPACING);
        // Two short words are one line; the icon column sets the height.
        assert_eq!(with.height, 32.0 + 36.0);
    }

    #[test]
    fn test_height_clamped_to_proposed() {
        let long: String = "word ".repeat(400);
        let viewer = viewer(&long, MessageIcon::None);
        let size = viewer.preferred_size(Size::new(300.0, 120.0));
        assert_eq!(size.height, 120.0);
        assert!(size.width <= 300.0);
    }

    #[test]
    fn test_empty_text_with_icon() {
        let viewer = viewer("", MessageIcon::Error);
        let size = viewer.preferred_size(Size::new(700.0, 900.0));
        assert_eq!(size.width, 32.0 + ICON_SPACING + 42.0);
        assert_eq!(size.height, 32.0 + 36.0);
    }

    #[test]
    fn test_minimum_size() {
        let viewer = viewer("anything", MessageIcon::Warning);
        let min = viewer.minimum_size();
        assert_eq!(min.width, 32.0 + 42.0);
        assert_eq!(min.height, 32.0 + 36.0);

        let no_icon = MessageViewer::new("x", MessageIcon::None, measurer());
        let line_height = measurer().line_height(&Font::default());
        assert_eq!(no_icon.minimum_size().height, line_height + 36.0);
    }

    #[test]
    fn test_paint_centers_short_text_against_icon() {
        let mut v = viewer("Short.", MessageIcon::Information);
        v.widget_base_mut().resize(400.0, 100.0);

        let mut renderer = RecordingRenderer::new();
        let rect = v.rect();
        let mut ctx = PaintContext::new(&mut renderer, rect);
        v.paint(&mut ctx);

        let text_rect = renderer
            .commands()
            .iter()
            .find_map(|c| match c {
                DrawCommand::Text { rect, .. } => Some(*rect),
                _ => None,
            })
            .expect("text drawn");

        // One 20px line against a 32px icon: centered 6px below the top
        // padding, shifted right past the icon column.
        assert_eq!(text_rect.top(), 18.0 + 6.0);
        assert_eq!(text_rect.left(), 21.0 + 32.0 + ICON_SPACING);
    }

    #[test]
    fn test_paint_draws_separator() {
        let mut v = viewer("Message", MessageIcon::None);
        v.widget_base_mut().resize(400.0, 100.0);

        let mut renderer = RecordingRenderer::new();
        let rect = v.rect();
        let mut ctx = PaintContext::new(&mut renderer, rect);
        v.paint(&mut ctx);

        let lines = renderer.lines();
        assert!(lines.contains(&(Point::new(0.0, 99.0), Point::new(400.0, 99.0))));

        // Separator can be turned off.
        v.set_separator(false);
        let mut renderer = RecordingRenderer::new();
        let mut ctx = PaintContext::new(&mut renderer, rect);
        v.paint(&mut ctx);
        assert!(renderer.lines().is_empty());
    }
}
