//! A message box with an expandable details panel.
//!
//! `horizon-msgbox` is a richly-featured replacement for the platform
//! message box: a modal dialog with the familiar icon + message + buttons
//! arrangement, plus an optional collapsible "Details" region for long-form
//! text (stack traces, logs), custom button labels, sound and animation
//! toggles, and text-aware auto-sizing.
//!
//! # Quick start
//!
//! ```
//! use horizon_msgbox::{MsgBox, MessageRequest, ButtonSet, MessageIcon};
//! horizon_msgbox_core::init_global_registry();
//!
//! let mut form = MsgBox::show(
//!     MessageRequest::new("Disk full.")
//!         .with_caption("Warning")
//!         .with_buttons(ButtonSet::OkCancel)
//!         .with_icon(MessageIcon::Warning),
//! );
//!
//! form.finished.connect(|result| {
//!     println!("dialog closed: {:?}", result);
//! });
//! # form.close();
//! ```
//!
//! # Dialog lifecycle
//!
//! Each `show*` call constructs a fresh, single-use [`MessageForm`] and
//! opens it modally. A blocking `exec()` is not idiomatic here: the host
//! event loop delivers input to the form, drives
//! [`MessageForm::step_animation`] on a timer while an expand/collapse
//! animation is in flight, and observes the `finished` signal (or
//! [`MessageForm::result`]) for the pressed button.

pub mod msgbox;
pub mod platform;
pub mod widget;

pub use msgbox::{
    ButtonSet, ConfigError, DefaultButton, DialogResult, MessageIcon, MessageRequest, MsgBox,
};
pub use widget::widgets::MessageForm;
