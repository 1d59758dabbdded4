//! Abstract button base implementation.
//!
//! Shared behavior for the dialog's button widgets ([`PushButton`],
//! [`ToggleButton`]): text with an optional `&x` mnemonic, checkable
//! state, click synthesis, and the standard button signals.
//!
//! [`PushButton`]: super::push_button::PushButton
//! [`ToggleButton`]: super::toggle_button::ToggleButton

use std::sync::Arc;

use horizon_msgbox_core::{Object, ObjectId, Signal};
use horizon_msgbox_render::{Color, Font, MetricTextMeasurer, Size, TextMeasurer};

use crate::widget::{
    FocusPolicy, Key, KeyPressEvent, MouseButton, MousePressEvent, MouseReleaseEvent, SizeHint,
    WidgetBase,
};

/// Common functionality for all button widgets.
///
/// Concrete button types embed this and delegate common operations.
pub struct AbstractButton {
    /// Widget base for common widget functionality.
    base: WidgetBase,

    /// The button's text label, possibly containing a `&x` mnemonic.
    text: String,

    /// Whether the button is checkable (toggle button).
    checkable: bool,

    /// Whether the button is currently checked (only meaningful if checkable).
    checked: bool,

    /// The font used for label measurement.
    font: Font,

    /// Text color.
    text_color: Color,

    /// Measurement service for auto-sizing.
    measurer: Arc<dyn TextMeasurer>,

    /// Signal emitted when the button is clicked.
    ///
    /// For checkable buttons this is emitted after the checked state
    /// changes; the payload is the new checked state (always `false` for
    /// non-checkable buttons).
    pub clicked: Signal<bool>,

    /// Signal emitted when the button is pressed down.
    pub pressed: Signal<()>,

    /// Signal emitted when the button is released.
    pub released: Signal<()>,

    /// Signal emitted when the checked state changes (checkable buttons).
    pub toggled: Signal<bool>,
}

impl AbstractButton {
    /// Create a new abstract button with the specified text.
    pub fn new(text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        // Buttons accept focus via both Tab and click.
        base.set_focus_policy(FocusPolicy::StrongFocus);

        Self {
            base,
            text: text.into(),
            checkable: false,
            checked: false,
            font: Font::default(),
            text_color: Color::BLACK,
            measurer: Arc::new(MetricTextMeasurer::default()),
            clicked: Signal::new(),
            pressed: Signal::new(),
            released: Signal::new(),
            toggled: Signal::new(),
        }
    }

    /// Set the text measurer using builder pattern.
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the button's text (including any mnemonic marker).
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the button's text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let new_text = text.into();
        if self.text != new_text {
            self.text = new_text;
            self.base.update();
        }
    }

    /// The text with the mnemonic marker stripped, for display.
    pub fn display_text(&self) -> String {
        self.text.replacen('&', "", 1)
    }

    /// The mnemonic character, if the label contains `&x`.
    pub fn mnemonic(&self) -> Option<char> {
        let mut chars = self.text.chars();
        while let Some(c) = chars.next() {
            if c == '&' {
                return chars.next().map(|m| m.to_ascii_lowercase());
            }
        }
        None
    }

    /// Check whether `key` (lowercase) matches this button's mnemonic.
    pub fn matches_mnemonic(&self, key: char) -> bool {
        self.mnemonic() == Some(key.to_ascii_lowercase())
    }

    // =========================================================================
    // Checkable State
    // =========================================================================

    /// Check if the button is checkable (toggle button).
    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Set whether the button is checkable.
    pub fn set_checkable(&mut self, checkable: bool) {
        if self.checkable != checkable {
            self.checkable = checkable;
            if !checkable && self.checked {
                self.checked = false;
                self.toggled.emit(false);
            }
            self.base.update();
        }
    }

    /// Set checkable using builder pattern.
    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    /// Check if the button is currently checked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state.
    ///
    /// No-op when the state is unchanged or the button is not checkable.
    pub fn set_checked(&mut self, checked: bool) {
        if self.checkable && self.checked != checked {
            self.checked = checked;
            self.toggled.emit(checked);
            self.base.update();
        }
    }

    /// Toggle the checked state (checkable buttons only).
    pub fn toggle(&mut self) {
        if self.checkable {
            self.set_checked(!self.checked);
        }
    }

    // =========================================================================
    // Font and Text Color
    // =========================================================================

    /// Get the font.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Set the font used for measurement and rendering.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
        self.base.update();
    }

    /// Get the text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the text color.
    pub fn set_text_color(&mut self, color: Color) {
        if self.text_color != color {
            self.text_color = color;
            self.base.update();
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a mouse press event. Returns `true` if handled.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if !self.base.is_enabled() || !self.base.is_visible() {
            return false;
        }

        self.base.set_pressed(true);
        self.pressed.emit(());
        true
    }

    /// Handle a mouse release event. Returns `true` if a click occurred.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if !self.base.is_enabled() || !self.base.is_visible() {
            return false;
        }

        let was_pressed = self.base.is_pressed();
        self.base.set_pressed(false);
        self.released.emit(());

        if was_pressed && self.base.contains_point(event.local_pos) {
            self.click();
            return true;
        }
        false
    }

    /// Handle a key press event. Returns `true` if handled.
    ///
    /// Space and Enter activate the button through the same synthetic
    /// click path as the mouse.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        if !self.base.is_enabled() {
            return false;
        }
        match event.key {
            Key::Space | Key::Enter => {
                if !event.is_repeat {
                    self.click();
                }
                true
            }
            _ => false,
        }
    }

    /// Programmatically click the button.
    ///
    /// Toggles the checked state (if checkable), then emits `clicked`.
    pub fn click(&mut self) {
        if !self.base.is_enabled() || !self.base.is_visible() {
            return;
        }

        if self.checkable {
            self.checked = !self.checked;
            self.toggled.emit(self.checked);
        }
        self.clicked.emit(self.checked);
        self.base.update();
    }

    // =========================================================================
    // Sizing Helpers
    // =========================================================================

    /// The size of the display text in the button's font.
    pub fn text_size(&self) -> Size {
        let text = self.display_text();
        if text.is_empty() {
            return Size::new(0.0, self.measurer.line_height(&self.font));
        }
        self.measurer.measure(&text, &self.font, f32::MAX)
    }

    /// A size hint for the content plus padding, floored at a minimum.
    pub fn size_hint_with_minimum(&self, minimum: Size) -> SizeHint {
        let text = self.text_size();
        // 16px beside the label, 3px above and below it.
        let preferred = Size::new(
            (text.width + 32.0).max(minimum.width),
            (text.height + 6.0).max(minimum.height),
        );
        SizeHint::new(preferred).with_minimum(minimum)
    }

    /// Background color for the current interaction state.
    pub fn background_color(&self, base_color: Color) -> Color {
        if !self.base.is_enabled() {
            Color::from_rgb8(200, 200, 200)
        } else if self.base.is_pressed() {
            shade(base_color, 0.8)
        } else if self.base.is_hovered() {
            shade(base_color, 1.1)
        } else if self.checked {
            shade(base_color, 0.9)
        } else {
            base_color
        }
    }

    /// Text color for the current interaction state.
    pub fn effective_text_color(&self) -> Color {
        if !self.base.is_enabled() {
            Color::from_rgb8(128, 128, 128)
        } else {
            self.text_color
        }
    }

    // =========================================================================
    // WidgetBase Access
    // =========================================================================

    /// Get a reference to the widget base.
    pub fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    /// Get a mutable reference to the widget base.
    pub fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }
}

impl Object for AbstractButton {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

/// Multiply a color's channels, clamping to the displayable range.
fn shade(color: Color, factor: f32) -> Color {
    Color::new(
        (color.r * factor).clamp(0.0, 1.0),
        (color.g * factor).clamp(0.0, 1.0),
        (color.b * factor).clamp(0.0, 1.0),
        color.a,
    )
}

static_assertions::assert_impl_all!(AbstractButton: Send, Sync);
