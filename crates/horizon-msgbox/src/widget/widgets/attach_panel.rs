//! Details region: a read-only, scrollable text surface.
//!
//! Starts hidden with no effective height; the dialog shows it when the
//! toggle expands and remembers its live height as the "expanded height"
//! for the next cycle. Geometry-changed notifications double as the
//! user-collapse signal consumed by the dialog.

use std::sync::Arc;

use horizon_msgbox_core::{Object, ObjectId, Signal};
use horizon_msgbox_render::{
    Color, Font, Rect, Renderer, Size, Stroke, TextMeasurer, TextOptions,
};

use crate::widget::layout::ContentMargins;
use crate::widget::{
    Key, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent,
};

/// Margins between the panel edge and the text surface.
const TEXT_MARGINS: ContentMargins = ContentMargins {
    left: 10.0,
    top: 7.0,
    right: 10.0,
    bottom: 2.0,
};

/// Width reserved for the vertical scrollbar.
const SCROLLBAR_WIDTH: f32 = 12.0;

/// The collapsible detail text panel.
pub struct AttachPanel {
    base: WidgetBase,

    /// The detail text. Read-only for the dialog's lifetime.
    text: String,

    font: Font,

    measurer: Arc<dyn TextMeasurer>,

    /// Vertical scroll position in pixels.
    scroll_offset: f32,

    /// Selected character range, if any.
    selection: Option<(usize, usize)>,

    /// Signal emitted when the panel's size changes.
    ///
    /// Mirrors `geometry_changed` with just the size, which is what the
    /// dialog's collapse detection listens for.
    pub resized: Signal<Size>,
}

impl AttachPanel {
    /// Create the panel for the given detail text. Starts hidden.
    pub fn new(text: impl Into<String>, measurer: Arc<dyn TextMeasurer>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_visible(false);
        base.set_size(Size::new(120.0, 105.0));

        Self {
            base,
            text: text.into(),
            font: Font::default(),
            measurer,
            scroll_offset: 0.0,
            selection: None,
            resized: Signal::new(),
        }
    }

    /// The detail text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The panel's current height (the live "expanded height").
    pub fn height(&self) -> f32 {
        self.base.height()
    }

    /// Resize the panel, emitting `resized` when the size changes.
    pub fn set_panel_size(&mut self, size: Size) {
        if self.base.size() != size {
            self.base.set_size(size);
            self.clamp_scroll();
            self.resized.emit(size);
        }
    }

    /// The inner text surface rectangle.
    fn text_rect(&self) -> Rect {
        let rect = self.base.rect();
        Rect::new(
            TEXT_MARGINS.left,
            TEXT_MARGINS.top,
            (rect.width() - TEXT_MARGINS.horizontal()).max(0.0),
            (rect.height() - TEXT_MARGINS.vertical()).max(0.0),
        )
    }

    /// Total height of the text at the current wrap width.
    fn content_height(&self) -> f32 {
        let wrap_width = (self.text_rect().width() - SCROLLBAR_WIDTH).max(0.0);
        self.measurer.measure(&self.text, &self.font, wrap_width).height
    }

    /// The furthest the view can scroll down.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height() - self.text_rect().height()).max(0.0)
    }

    /// The current scroll position.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll by a signed pixel amount, clamped to the content.
    pub fn scroll_by(&mut self, delta: f32) {
        let clamped = (self.scroll_offset + delta).clamp(0.0, self.max_scroll());
        if clamped != self.scroll_offset {
            self.scroll_offset = clamped;
            self.base.update();
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// Select the entire text.
    pub fn select_all(&mut self) {
        self.selection = Some((0, self.text.chars().count()));
        self.base.update();
    }

    /// The selected character range, if any.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// The selected text.
    pub fn selected_text(&self) -> &str {
        match self.selection {
            Some((start, end)) if start == 0 && end == self.text.chars().count() => &self.text,
            _ => "",
        }
    }
}

impl Object for AttachPanel {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for AttachPanel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.base.size())
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let full = ctx.rect();
        ctx.renderer().fill_rect(full, Color::from_rgb8(240, 240, 240));

        let text_rect = self.text_rect();
        ctx.renderer().fill_rect(text_rect, Color::WHITE);
        ctx.renderer()
            .stroke_rect(text_rect, &Stroke::new(Color::from_rgb8(173, 173, 173), 1.0));

        // Text surface, shifted by the scroll position.
        let inner = Rect::new(
            text_rect.left() + 2.0,
            text_rect.top() + 2.0 - self.scroll_offset,
            (text_rect.width() - SCROLLBAR_WIDTH - 4.0).max(0.0),
            self.content_height(),
        );
        ctx.renderer().draw_text(
            &self.text,
            inner,
            &self.font,
            Color::BLACK,
            TextOptions::message(),
        );

        // Scrollbar thumb when the content overflows.
        let max_scroll = self.max_scroll();
        if max_scroll > 0.0 {
            let track_height = text_rect.height();
            let thumb_height =
                (track_height * track_height / self.content_height()).max(16.0);
            let thumb_y = text_rect.top()
                + (track_height - thumb_height) * (self.scroll_offset / max_scroll);
            let thumb = Rect::new(
                text_rect.right() - SCROLLBAR_WIDTH + 2.0,
                thumb_y,
                SCROLLBAR_WIDTH - 4.0,
                thumb_height,
            );
            ctx.renderer().fill_rect(thumb, Color::from_rgb8(205, 205, 205));
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::KeyPress(e) => match e.key {
                // Ctrl+A selects everything.
                Key::A if e.modifiers.control => {
                    self.select_all();
                    true
                }
                Key::ArrowDown => {
                    self.scroll_by(self.measurer.line_height(&self.font));
                    true
                }
                Key::ArrowUp => {
                    self.scroll_by(-self.measurer.line_height(&self.font));
                    true
                }
                _ => false,
            },
            WidgetEvent::Resize(e) => {
                self.resized.emit(e.new_size);
                false
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{KeyboardModifiers, KeyPressEvent};
    use horizon_msgbox_core::init_global_registry;
    use horizon_msgbox_render::MetricTextMeasurer;
    use parking_lot::Mutex;

    fn panel(text: &str) -> AttachPanel {
        init_global_registry();
        AttachPanel::new(text, Arc::new(MetricTextMeasurer::default()))
    }

    #[test]
    fn test_starts_hidden() {
        let p = panel("stack trace");
        assert!(!p.is_visible());
    }

    #[test]
    fn test_resized_signal() {
        let mut p = panel("detail");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        p.resized.connect(move |size| {
            seen_clone.lock().push(*size);
        });

        p.set_panel_size(Size::new(400.0, 200.0));
        // Same size again: no notification.
        p.set_panel_size(Size::new(400.0, 200.0));
        p.set_panel_size(Size::new(400.0, 0.0));

        assert_eq!(
            *seen.lock(),
            vec![Size::new(400.0, 200.0), Size::new(400.0, 0.0)]
        );
    }

    #[test]
    fn test_select_all_via_ctrl_a() {
        let mut p = panel("all of this text");
        assert_eq!(p.selection(), None);

        let mut event = WidgetEvent::KeyPress(KeyPressEvent {
            key: Key::A,
            modifiers: KeyboardModifiers::control(),
            text: String::new(),
            is_repeat: false,
        });
        assert!(p.event(&mut event));
        assert_eq!(p.selection(), Some((0, 16)));
        assert_eq!(p.selected_text(), "all of this text");

        // Plain 'a' without Control does not select.
        let mut plain = WidgetEvent::KeyPress(KeyPressEvent::plain(Key::A));
        assert!(!p.event(&mut plain));
    }

    #[test]
    fn test_scroll_clamped_to_content() {
        let mut p = panel(&"line\n".repeat(60));
        p.set_panel_size(Size::new(300.0, 120.0));

        assert!(p.max_scroll() > 0.0);
        p.scroll_by(10_000.0);
        assert_eq!(p.scroll_offset(), p.max_scroll());
        p.scroll_by(-10_000.0);
        assert_eq!(p.scroll_offset(), 0.0);
    }

    #[test]
    fn test_short_text_does_not_scroll() {
        let mut p = panel("short");
        p.set_panel_size(Size::new(300.0, 120.0));
        assert_eq!(p.max_scroll(), 0.0);
        p.scroll_by(50.0);
        assert_eq!(p.scroll_offset(), 0.0);
    }
}
