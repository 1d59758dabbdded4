//! The dialog's widgets.

mod abstract_button;
mod attach_panel;
mod buttons_panel;
mod message_form;
mod message_viewer;
mod push_button;
mod toggle_button;

pub use abstract_button::AbstractButton;
pub use attach_panel::AttachPanel;
pub use buttons_panel::{ButtonsPanel, PanelHit};
pub use message_form::{MessageForm, ScreenMetrics, StartPosition, MAX_CLIENT_WIDTH};
pub use message_viewer::{MessageViewer, ICON_SPACING};
pub use push_button::{PushButton, MIN_BUTTON_SIZE};
pub use toggle_button::{ToggleButton, MIN_TOGGLE_SIZE};
