//! Push button widget implementation.
//!
//! The standard response button: a label, a dialog result code, and an
//! auto-fit width with a minimum floor so short labels still give a decent
//! click target.

use std::sync::Arc;

use horizon_msgbox_core::{Object, ObjectId, Signal};
use horizon_msgbox_render::{
    Color, Renderer, RoundedRect, Size, Stroke, TextMeasurer, TextOptions,
};

use crate::msgbox::DialogResult;
use crate::widget::{PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

use super::abstract_button::AbstractButton;

/// Minimum size of a response button.
pub const MIN_BUTTON_SIZE: Size = Size::new(85.0, 27.0);

/// A standard clickable response button.
///
/// # Signals
///
/// - `clicked`: emitted when the button is activated (mouse, Space/Enter,
///   or mnemonic)
pub struct PushButton {
    /// Shared button behavior.
    inner: AbstractButton,

    /// The dialog result this button produces.
    result: DialogResult,

    /// Whether this button is the dialog default (activated by Enter).
    is_default: bool,
}

impl PushButton {
    /// Create a button with the given label and result code.
    pub fn new(text: impl Into<String>, result: DialogResult) -> Self {
        Self {
            inner: AbstractButton::new(text),
            result,
            is_default: false,
        }
    }

    /// Set the text measurer using builder pattern.
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.inner = self.inner.with_measurer(measurer);
        self
    }

    /// Set the default flag using builder pattern.
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Get the button's label (including any mnemonic marker).
    pub fn text(&self) -> &str {
        self.inner.text()
    }

    /// The dialog result this button produces.
    pub fn result(&self) -> DialogResult {
        self.result
    }

    /// Whether this button is the dialog default.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Set whether this button is the dialog default.
    pub fn set_default(&mut self, is_default: bool) {
        if self.is_default != is_default {
            self.is_default = is_default;
            self.inner.widget_base_mut().update();
        }
    }

    /// Resize the button to its auto-fit size.
    pub fn auto_size(&mut self) {
        let preferred = self.size_hint().preferred;
        self.inner.widget_base_mut().set_size(preferred);
    }

    /// Programmatically click the button.
    pub fn click(&mut self) {
        self.inner.click();
    }

    /// The clicked signal.
    pub fn clicked(&self) -> &Signal<bool> {
        &self.inner.clicked
    }
}

impl Object for PushButton {
    fn object_id(&self) -> ObjectId {
        self.inner.object_id()
    }
}

impl Widget for PushButton {
    fn widget_base(&self) -> &WidgetBase {
        self.inner.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.inner.widget_base_mut()
    }

    fn size_hint(&self) -> SizeHint {
        self.inner.size_hint_with_minimum(MIN_BUTTON_SIZE)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let base_color = Color::from_rgb8(225, 225, 225);
        let background = self.inner.background_color(base_color);

        let rounded = RoundedRect::new(rect, 3.0);
        ctx.renderer().fill_rounded_rect(rounded, background);

        // The default button carries an accented border.
        let border_color = if self.is_default {
            Color::from_rgb8(0, 120, 215)
        } else {
            Color::from_rgb8(173, 173, 173)
        };
        ctx.renderer()
            .stroke_rounded_rect(rounded, &Stroke::new(border_color, 1.0));

        let text_color = self.inner.effective_text_color();
        let text_rect = rect.deflate(4.0);
        let label = self.inner.text().to_owned();
        ctx.renderer().draw_text(
            &label,
            text_rect,
            self.inner.font(),
            text_color,
            TextOptions::label(),
        );

        if ctx.should_show_focus() {
            ctx.draw_focus_indicator(2.0);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::MousePress(e) => self.inner.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.inner.handle_mouse_release(e),
            WidgetEvent::KeyPress(e) => self.inner.handle_key_press(e),
            _ => false,
        }
    }

    fn matches_mnemonic_key(&self, key: char) -> bool {
        self.inner.matches_mnemonic(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_msgbox_core::init_global_registry;
    use horizon_msgbox_render::RecordingRenderer;

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_auto_size_floors_at_minimum() {
        setup();
        let mut button = PushButton::new("&OK", DialogResult::Ok);
        button.auto_size();
        // "OK" is far narrower than the floor.
        assert_eq!(button.size(), MIN_BUTTON_SIZE);
    }

    #[test]
    fn test_auto_size_grows_for_long_labels() {
        setup();
        let mut button = PushButton::new("Send the full crash report", DialogResult::Yes);
        button.auto_size();
        assert!(button.size().width > MIN_BUTTON_SIZE.width);
        assert_eq!(button.size().height, MIN_BUTTON_SIZE.height);
    }

    #[test]
    fn test_result_and_default() {
        setup();
        let mut button = PushButton::new("&Cancel", DialogResult::Cancel).with_default(true);
        assert_eq!(button.result(), DialogResult::Cancel);
        assert!(button.is_default());
        button.set_default(false);
        assert!(!button.is_default());
    }

    #[test]
    fn test_paint_draws_label() {
        setup();
        let mut button = PushButton::new("&Retry", DialogResult::Retry);
        button.auto_size();

        let mut renderer = RecordingRenderer::new();
        let rect = button.rect();
        let mut ctx = PaintContext::new(&mut renderer, rect);
        button.paint(&mut ctx);

        assert_eq!(renderer.texts(), vec!["&Retry"]);
    }

    #[test]
    fn test_mnemonic_key() {
        setup();
        let button = PushButton::new("&Ignore", DialogResult::Ignore);
        assert!(button.matches_mnemonic_key('i'));
        assert!(!button.matches_mnemonic_key('r'));
    }
}
