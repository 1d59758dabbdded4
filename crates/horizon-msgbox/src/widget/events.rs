//! Input and lifecycle events delivered to widgets.
//!
//! Trimmed to what a dialog needs: mouse press/release/double-click and
//! move, keyboard, resize and show/hide. A handler returns `true` when it
//! consumed the event.

use horizon_msgbox_render::{Point, Size};

/// State of the keyboard modifiers at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Only Control held.
    pub fn control() -> Self {
        Self {
            control: true,
            ..Self::NONE
        }
    }

    /// Only Alt held.
    pub fn alt() -> Self {
        Self {
            alt: true,
            ..Self::NONE
        }
    }
}

/// A mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A keyboard key.
///
/// Only the keys the dialog layer reacts to are enumerated; everything
/// else arrives as [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    // Letters (for mnemonics and shortcuts)
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Navigation
    ArrowUp, ArrowDown, ArrowLeft, ArrowRight,
    Home, End, PageUp, PageDown,

    // Activation and dismissal
    Enter, Space, Escape, Tab,

    /// Unmapped key with its raw scan code.
    Unknown(u16),
}

impl Key {
    /// The lowercase character for a letter key, if this is one.
    pub fn to_char(self) -> Option<char> {
        let c = match self {
            Key::A => 'a', Key::B => 'b', Key::C => 'c', Key::D => 'd',
            Key::E => 'e', Key::F => 'f', Key::G => 'g', Key::H => 'h',
            Key::I => 'i', Key::J => 'j', Key::K => 'k', Key::L => 'l',
            Key::M => 'm', Key::N => 'n', Key::O => 'o', Key::P => 'p',
            Key::Q => 'q', Key::R => 'r', Key::S => 's', Key::T => 't',
            Key::U => 'u', Key::V => 'v', Key::W => 'w', Key::X => 'x',
            Key::Y => 'y', Key::Z => 'z',
            _ => return None,
        };
        Some(c)
    }
}

/// A mouse button was pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePressEvent {
    /// Which button was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Modifier state.
    pub modifiers: KeyboardModifiers,
}

/// A mouse button was released.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseReleaseEvent {
    pub button: MouseButton,
    pub local_pos: Point,
    pub modifiers: KeyboardModifiers,
}

/// A mouse button was double-clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseDoubleClickEvent {
    pub button: MouseButton,
    pub local_pos: Point,
    pub modifiers: KeyboardModifiers,
}

/// The mouse moved over the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMoveEvent {
    pub local_pos: Point,
}

/// A key was pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPressEvent {
    /// Which key was pressed.
    pub key: Key,
    /// Modifier state.
    pub modifiers: KeyboardModifiers,
    /// The text the key produced, if any.
    pub text: String,
    /// Whether this is an auto-repeat.
    pub is_repeat: bool,
}

impl KeyPressEvent {
    /// A plain key press without modifiers or text.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: KeyboardModifiers::NONE,
            text: String::new(),
            is_repeat: false,
        }
    }
}

/// The widget was resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub old_size: Size,
    pub new_size: Size,
}

/// Any event a widget can receive.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    MousePress(MousePressEvent),
    MouseRelease(MouseReleaseEvent),
    MouseDoubleClick(MouseDoubleClickEvent),
    MouseMove(MouseMoveEvent),
    KeyPress(KeyPressEvent),
    Resize(ResizeEvent),
    Show,
    Hide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_to_char() {
        assert_eq!(Key::D.to_char(), Some('d'));
        assert_eq!(Key::Enter.to_char(), None);
        assert_eq!(Key::Unknown(17).to_char(), None);
    }

    #[test]
    fn test_modifier_helpers() {
        assert!(KeyboardModifiers::control().control);
        assert!(!KeyboardModifiers::control().alt);
        assert!(KeyboardModifiers::alt().alt);
    }
}
