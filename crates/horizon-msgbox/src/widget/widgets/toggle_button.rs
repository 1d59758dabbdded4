//! Checkable "Details" toggle button.
//!
//! The platform's widget set has no lightweight standalone checkable
//! button with a state glyph, so the original wrapped a one-button native
//! toolbar to get check semantics. In this toolkit every widget is
//! custom-drawn, so this is the software-rendered variant of that
//! contract: a boolean checked state with change notification, a two-state
//! glyph (index 0 collapsed, 1 expanded) swapped on every change, mnemonic
//! and Space/Enter activation through one synthetic-click path, and
//! suppressed double-clicks and non-left buttons.

use std::sync::Arc;

use horizon_msgbox_core::{Object, ObjectId, Signal};
use horizon_msgbox_render::{
    Color, Point, Rect, Renderer, RoundedRect, Size, Stroke, TextMeasurer, TextOptions,
};

use crate::widget::{Key, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

use super::abstract_button::AbstractButton;

/// Minimum size of the toggle button.
pub const MIN_TOGGLE_SIZE: Size = Size::new(93.0, 27.0);

/// Glyph box edge length.
const GLYPH_SIZE: f32 = 16.0;

/// A checkable push-button driving the details expand/collapse.
///
/// # Signals
///
/// - `toggled`: emitted when the checked state changes
/// - `clicked`: emitted on activation
pub struct ToggleButton {
    /// Shared button behavior (checkable).
    inner: AbstractButton,

    /// Glyph index: 0 = collapsed icon, 1 = expanded icon.
    image_index: usize,

    /// Whether the flat/animated visual style is active.
    animated: bool,

    /// Whether check semantics are active. Buttons built in non-toggle
    /// mode ignore checked-state writes entirely.
    toggle_mode: bool,
}

impl ToggleButton {
    /// Create the details toggle.
    ///
    /// `animated` selects the flat visual style whose press feedback is
    /// animated by the compositor; it does not change behavior.
    pub fn new(animated: bool) -> Self {
        let inner = AbstractButton::new("&Details").with_checkable(true);
        Self {
            inner,
            image_index: 0,
            animated,
            toggle_mode: true,
        }
    }

    /// Set the text measurer using builder pattern.
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.inner = self.inner.with_measurer(measurer);
        self
    }

    /// Get the button's label (including the mnemonic marker).
    pub fn text(&self) -> &str {
        self.inner.text()
    }

    /// Set the button's label.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.inner.set_text(text);
    }

    /// Whether the flat/animated style is active.
    pub fn is_animated(&self) -> bool {
        self.animated
    }

    /// The current glyph index (0 collapsed, 1 expanded).
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Get the checked (expanded) state.
    pub fn is_checked(&self) -> bool {
        self.inner.is_checked()
    }

    /// Set the checked state.
    ///
    /// No-op when the value is unchanged or the button was built in
    /// non-toggle mode. Otherwise swaps the glyph and raises `toggled`.
    pub fn set_checked(&mut self, checked: bool) {
        if !self.toggle_mode || self.inner.is_checked() == checked {
            return;
        }
        // Glyph swaps before observers run, so they repaint the new state.
        self.image_index = usize::from(checked);
        self.inner.set_checked(checked);
    }

    /// Perform a synthetic left click.
    ///
    /// Mnemonic and keyboard activation both route through here so every
    /// state change takes the same path as a mouse click.
    pub fn perform_click(&mut self) {
        let base = self.inner.widget_base();
        if !base.is_enabled() || !base.is_visible() {
            return;
        }
        if self.toggle_mode {
            self.image_index = usize::from(!self.inner.is_checked());
        }
        self.inner.click();
    }

    /// The toggled signal.
    pub fn toggled(&self) -> &Signal<bool> {
        &self.inner.toggled
    }

    /// The clicked signal.
    pub fn clicked(&self) -> &Signal<bool> {
        &self.inner.clicked
    }

    /// Resize the button to its auto-fit size.
    pub fn auto_size(&mut self) {
        let preferred = self.size_hint().preferred;
        self.inner.widget_base_mut().set_size(preferred);
    }

    fn glyph_rect(&self) -> Rect {
        let rect = self.inner.widget_base().rect();
        Rect::new(
            6.0,
            (rect.height() - GLYPH_SIZE) / 2.0,
            GLYPH_SIZE,
            GLYPH_SIZE,
        )
    }
}

impl Object for ToggleButton {
    fn object_id(&self) -> ObjectId {
        self.inner.object_id()
    }
}

impl Widget for ToggleButton {
    fn widget_base(&self) -> &WidgetBase {
        self.inner.widget_base()
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        self.inner.widget_base_mut()
    }

    fn size_hint(&self) -> SizeHint {
        // Room for the glyph ahead of the text.
        let mut hint = self.inner.size_hint_with_minimum(MIN_TOGGLE_SIZE);
        hint.preferred.width = (hint.preferred.width + GLYPH_SIZE).max(MIN_TOGGLE_SIZE.width);
        hint
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let base = self.inner.widget_base();

        // Flat toolbar look: background only when interacting or checked.
        if base.is_pressed() || base.is_hovered() || self.is_checked() {
            let background = self.inner.background_color(Color::from_rgb8(229, 241, 251));
            ctx.renderer()
                .fill_rounded_rect(RoundedRect::new(rect, 2.0), background);
            ctx.renderer().stroke_rounded_rect(
                RoundedRect::new(rect, 2.0),
                &Stroke::new(Color::from_rgb8(160, 195, 225), 1.0),
            );
        }

        // Chevron glyph: down when collapsed, up when expanded.
        let glyph = self.glyph_rect();
        let center = glyph.center();
        let stroke = Stroke::new(Color::from_rgb8(60, 60, 60), 2.0);
        let (tip_y, wing_y) = if self.image_index == 0 {
            (center.y + 3.0, center.y - 2.0)
        } else {
            (center.y - 3.0, center.y + 2.0)
        };
        ctx.renderer().draw_line(
            Point::new(center.x - 5.0, wing_y),
            Point::new(center.x, tip_y),
            &stroke,
        );
        ctx.renderer().draw_line(
            Point::new(center.x, tip_y),
            Point::new(center.x + 5.0, wing_y),
            &stroke,
        );

        // Label to the right of the glyph.
        let text_rect = Rect::new(
            glyph.right() + 4.0,
            0.0,
            (rect.width() - glyph.right() - 4.0).max(0.0),
            rect.height(),
        );
        ctx.renderer().draw_text(
            self.inner.text(),
            text_rect,
            self.inner.font(),
            self.inner.effective_text_color(),
            TextOptions::label(),
        );
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            // Double clicks are swallowed without any state change.
            WidgetEvent::MouseDoubleClick(_) => true,
            WidgetEvent::MousePress(e) => self.inner.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => {
                // The glyph must flip before the toggled observers run.
                let base = self.inner.widget_base();
                let will_click = base.is_pressed() && base.contains_point(e.local_pos);
                if will_click && self.toggle_mode {
                    self.image_index = usize::from(!self.inner.is_checked());
                }
                self.inner.handle_mouse_release(e)
            }
            WidgetEvent::KeyPress(e) if matches!(e.key, Key::Space | Key::Enter) => {
                if !e.is_repeat {
                    self.perform_click();
                }
                true
            }
            _ => false,
        }
    }

    fn matches_mnemonic_key(&self, key: char) -> bool {
        self.inner.matches_mnemonic(key)
    }
}
