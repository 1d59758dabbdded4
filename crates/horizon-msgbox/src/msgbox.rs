//! Public message-box API: enumerated domains, the dialog request, raw
//! validation, and the process-wide behavior flags.
//!
//! The typed entry points ([`MsgBox::show`] and friends) make invalid
//! configurations unrepresentable. [`MsgBox::show_raw`] exists for callers
//! holding raw platform integers; it validates all three selectors against
//! their enumerated domains *before* any widget is constructed and fails
//! with [`ConfigError`] otherwise.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use horizon_msgbox_render::{MetricTextMeasurer, Size, TextMeasurer};

use crate::platform::sound::SystemSound;
use crate::widget::widgets::{MessageForm, ScreenMetrics};

/// Default caption for informational dialogs.
pub const INFO_CAPTION: &str = "Information";
/// Default caption for warning dialogs.
pub const WARNING_CAPTION: &str = "Warning";
/// Default caption for error dialogs.
pub const ERROR_CAPTION: &str = "Error";

// ============================================================================
// Dialog Result
// ============================================================================

/// The button the user pressed to dismiss the dialog.
///
/// Matches the platform's native dialog-result enumeration. `None` means
/// the dialog was dismissed without pressing a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogResult {
    /// Dismissed without a button.
    #[default]
    None,
    /// The "OK" button.
    Ok,
    /// The "Cancel" button.
    Cancel,
    /// The "Abort" button.
    Abort,
    /// The "Retry" button.
    Retry,
    /// The "Ignore" button.
    Ignore,
    /// The "Yes" button.
    Yes,
    /// The "No" button.
    No,
}

impl DialogResult {
    /// The built-in label for the button producing this result, with its
    /// mnemonic marker.
    pub fn default_label(&self) -> &'static str {
        match self {
            DialogResult::None => "",
            DialogResult::Ok => "&OK",
            DialogResult::Cancel => "&Cancel",
            DialogResult::Abort => "&Abort",
            DialogResult::Retry => "&Retry",
            DialogResult::Ignore => "&Ignore",
            DialogResult::Yes => "&Yes",
            DialogResult::No => "&No",
        }
    }
}

// ============================================================================
// Button Set
// ============================================================================

/// One of the six fixed combinations of response buttons.
///
/// Discriminants match the platform enumeration accepted by
/// [`TryFrom<i32>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum ButtonSet {
    /// A single "OK" button.
    #[default]
    Ok = 0,
    /// "OK" and "Cancel".
    OkCancel = 1,
    /// "Abort", "Retry" and "Ignore".
    AbortRetryIgnore = 2,
    /// "Yes", "No" and "Cancel".
    YesNoCancel = 3,
    /// "Yes" and "No".
    YesNo = 4,
    /// "Retry" and "Cancel".
    RetryCancel = 5,
}

impl ButtonSet {
    /// The result codes of this set's buttons, in left-to-right order.
    pub fn results(&self) -> &'static [DialogResult] {
        match self {
            ButtonSet::Ok => &[DialogResult::Ok],
            ButtonSet::OkCancel => &[DialogResult::Ok, DialogResult::Cancel],
            ButtonSet::AbortRetryIgnore => {
                &[DialogResult::Abort, DialogResult::Retry, DialogResult::Ignore]
            }
            ButtonSet::YesNoCancel => {
                &[DialogResult::Yes, DialogResult::No, DialogResult::Cancel]
            }
            ButtonSet::YesNo => &[DialogResult::Yes, DialogResult::No],
            ButtonSet::RetryCancel => &[DialogResult::Retry, DialogResult::Cancel],
        }
    }

    /// Number of response buttons in this set.
    pub fn button_count(&self) -> usize {
        self.results().len()
    }

    /// Whether this set contains a Cancel-equivalent button.
    ///
    /// Spelled out per set on purpose: an ordinal-parity shortcut ("odd
    /// means cancel") only holds for this exact numbering and breaks
    /// silently under any renumbering.
    pub fn has_cancel(&self) -> bool {
        match self {
            ButtonSet::OkCancel | ButtonSet::YesNoCancel | ButtonSet::RetryCancel => true,
            ButtonSet::Ok | ButtonSet::AbortRetryIgnore | ButtonSet::YesNo => false,
        }
    }

    /// Whether Escape dismisses the dialog via the last button.
    ///
    /// Allowed for the single-OK set or any set with a Cancel-equivalent.
    pub fn allows_escape(&self) -> bool {
        matches!(self, ButtonSet::Ok) || self.has_cancel()
    }

    /// Resolve the default-button selector to a slot index in this set.
    pub fn default_index(&self, default_button: DefaultButton) -> usize {
        match self.button_count() {
            1 => 0,
            2 => {
                if default_button == DefaultButton::Button2 {
                    1
                } else {
                    0
                }
            }
            _ => default_button.slot_index(),
        }
    }
}

impl TryFrom<i32> for ButtonSet {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ButtonSet::Ok),
            1 => Ok(ButtonSet::OkCancel),
            2 => Ok(ButtonSet::AbortRetryIgnore),
            3 => Ok(ButtonSet::YesNoCancel),
            4 => Ok(ButtonSet::YesNo),
            5 => Ok(ButtonSet::RetryCancel),
            other => Err(ConfigError::InvalidButtonSet(other)),
        }
    }
}

// ============================================================================
// Message Icon
// ============================================================================

/// The icon to display beside the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageIcon {
    /// No icon.
    #[default]
    None,
    /// An information icon ("i" in a circle).
    Information,
    /// A warning icon ("!" in a triangle).
    Warning,
    /// An error icon ("X" in a circle).
    Error,
    /// A question icon ("?" in a circle).
    Question,
}

impl MessageIcon {
    /// Check if an icon is actually displayed.
    pub fn is_visible(&self) -> bool {
        !matches!(self, MessageIcon::None)
    }

    /// The icon's rendered size. Zero when no icon is shown.
    pub fn display_size(&self) -> Size {
        if self.is_visible() {
            Size::new(32.0, 32.0)
        } else {
            Size::ZERO
        }
    }

    /// The system notification sound associated with this icon.
    ///
    /// Question has no sound of its own and borrows the information sound.
    pub fn sound(&self) -> SystemSound {
        match self {
            MessageIcon::None => SystemSound::Default,
            MessageIcon::Information | MessageIcon::Question => SystemSound::Asterisk,
            MessageIcon::Warning => SystemSound::Exclamation,
            MessageIcon::Error => SystemSound::Hand,
        }
    }
}

impl TryFrom<i32> for MessageIcon {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, ConfigError> {
        // Platform values: 0 none, 16 hand/error/stop, 32 question,
        // 48 exclamation/warning, 64 asterisk/information.
        match value {
            0 => Ok(MessageIcon::None),
            16 => Ok(MessageIcon::Error),
            32 => Ok(MessageIcon::Question),
            48 => Ok(MessageIcon::Warning),
            64 => Ok(MessageIcon::Information),
            other => Err(ConfigError::InvalidIcon(other)),
        }
    }
}

// ============================================================================
// Default Button
// ============================================================================

/// Which button slot is the default (activated by Enter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultButton {
    /// The first (leftmost) response button.
    #[default]
    Button1,
    /// The second response button.
    Button2,
    /// The third response button.
    Button3,
}

impl DefaultButton {
    /// Zero-based slot index encoded by this selector.
    pub fn slot_index(&self) -> usize {
        match self {
            DefaultButton::Button1 => 0,
            DefaultButton::Button2 => 1,
            DefaultButton::Button3 => 2,
        }
    }
}

impl TryFrom<i32> for DefaultButton {
    type Error = ConfigError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        // Platform values: 0, 0x100, 0x200.
        match value {
            0x000 => Ok(DefaultButton::Button1),
            0x100 => Ok(DefaultButton::Button2),
            0x200 => Ok(DefaultButton::Button3),
            other => Err(ConfigError::InvalidDefaultButton(other)),
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// A raw selector fell outside its enumerated domain.
///
/// Raised synchronously at the validating boundary, before any dialog is
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The button-set value is not a recognized combination.
    #[error("button set {0} is not a valid enumeration member")]
    InvalidButtonSet(i32),
    /// The icon value is not a recognized icon.
    #[error("icon {0} is not a valid enumeration member")]
    InvalidIcon(i32),
    /// The default-button value is not a recognized selector.
    #[error("default button {0} is not a valid enumeration member")]
    InvalidDefaultButton(i32),
}

// ============================================================================
// Button Spec
// ============================================================================

/// One resolved response button: its label, result code and default flag.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSpec {
    /// The label to render (override or built-in default).
    pub label: String,
    /// The result code the button produces.
    pub result: DialogResult,
    /// Whether this button is the dialog default.
    pub is_default: bool,
}

// ============================================================================
// Message Request
// ============================================================================

/// Immutable description of one dialog invocation.
#[derive(Debug, Clone)]
pub struct MessageRequest {
    message: String,
    caption: String,
    attach: Option<String>,
    buttons: ButtonSet,
    icon: MessageIcon,
    default_button: DefaultButton,
    expand: bool,
    button_texts: Vec<String>,
}

impl MessageRequest {
    /// Create a request with the given message text and defaults for
    /// everything else (no caption, OK button, no icon).
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            caption: String::new(),
            attach: None,
            buttons: ButtonSet::Ok,
            icon: MessageIcon::None,
            default_button: DefaultButton::Button1,
            expand: false,
            button_texts: Vec::new(),
        }
    }

    /// Set the window caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Set the attached detail text. Empty text counts as no attachment.
    pub fn with_attach(mut self, attach: impl Into<String>) -> Self {
        let attach = attach.into();
        self.attach = if attach.is_empty() { None } else { Some(attach) };
        self
    }

    /// Set the button combination.
    pub fn with_buttons(mut self, buttons: ButtonSet) -> Self {
        self.buttons = buttons;
        self
    }

    /// Set the icon.
    pub fn with_icon(mut self, icon: MessageIcon) -> Self {
        self.icon = icon;
        self
    }

    /// Set the default-button selector.
    pub fn with_default_button(mut self, default_button: DefaultButton) -> Self {
        self.default_button = default_button;
        self
    }

    /// Request the details region to be expanded on first show.
    ///
    /// Only meaningful when an attachment is present.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Set per-slot button text overrides, in left-to-right slot order.
    ///
    /// Missing or empty entries fall back to the built-in label; entries
    /// beyond the button count are ignored.
    pub fn with_button_texts<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.button_texts = texts.into_iter().map(Into::into).collect();
        self
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The window caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The attached detail text, if any.
    pub fn attach(&self) -> Option<&str> {
        self.attach.as_deref()
    }

    /// Whether an attachment is present.
    pub fn has_attach(&self) -> bool {
        self.attach.is_some()
    }

    /// The button combination.
    pub fn buttons(&self) -> ButtonSet {
        self.buttons
    }

    /// The icon.
    pub fn icon(&self) -> MessageIcon {
        self.icon
    }

    /// The default-button selector.
    pub fn default_button(&self) -> DefaultButton {
        self.default_button
    }

    /// Whether the details region starts expanded.
    pub fn expand(&self) -> bool {
        self.expand
    }

    /// The override text for a slot, if a non-empty one was supplied.
    pub fn button_text(&self, slot: usize) -> Option<&str> {
        self.button_texts
            .get(slot)
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Resolve this request to the ordered list of response buttons.
    pub fn button_specs(&self) -> Vec<ButtonSpec> {
        let default_index = self.buttons.default_index(self.default_button);
        self.buttons
            .results()
            .iter()
            .enumerate()
            .map(|(slot, &result)| ButtonSpec {
                label: self
                    .button_text(slot)
                    .unwrap_or_else(|| result.default_label())
                    .to_owned(),
                result,
                is_default: slot == default_index,
            })
            .collect()
    }
}

// ============================================================================
// MsgBox
// ============================================================================

static ANIMATE_ENABLED: AtomicBool = AtomicBool::new(true);
static SOUND_ENABLED: AtomicBool = AtomicBool::new(true);

/// Entry points for showing message dialogs.
///
/// Every call constructs a fresh, single-use [`MessageForm`], opens it
/// modally and returns it; the host event loop drives input and observes
/// the form's `finished` signal for the result.
pub struct MsgBox;

impl MsgBox {
    /// Whether expand/collapse resizes are animated. On by default.
    pub fn animate_enabled() -> bool {
        ANIMATE_ENABLED.load(Ordering::Relaxed)
    }

    /// Enable or disable expand/collapse animation process-wide.
    ///
    /// Read once at dialog construction; dialogs already open keep the
    /// behavior they were created with.
    pub fn set_animate_enabled(enabled: bool) {
        ANIMATE_ENABLED.store(enabled, Ordering::Relaxed);
    }

    /// Whether the icon's system sound plays when a dialog is shown.
    pub fn sound_enabled() -> bool {
        SOUND_ENABLED.load(Ordering::Relaxed)
    }

    /// Enable or disable the notification sound process-wide.
    pub fn set_sound_enabled(enabled: bool) {
        SOUND_ENABLED.store(enabled, Ordering::Relaxed);
    }

    /// Show a dialog described by `request`.
    pub fn show(request: MessageRequest) -> MessageForm {
        Self::show_with(request, Arc::new(MetricTextMeasurer::default()), ScreenMetrics::default())
    }

    /// Show a dialog with an explicit text measurer and screen metrics.
    ///
    /// Embeddings with a real text stack pass their own measurer here.
    pub fn show_with(
        request: MessageRequest,
        measurer: Arc<dyn TextMeasurer>,
        metrics: ScreenMetrics,
    ) -> MessageForm {
        let mut form = MessageForm::new(
            request,
            Self::animate_enabled(),
            Self::sound_enabled(),
            measurer,
            metrics,
        );
        form.open();
        form
    }

    /// Show a dialog from raw platform selector values.
    ///
    /// Validates `buttons`, `icon` and `default_button` against their
    /// enumerated domains before any widget is constructed.
    #[allow(clippy::too_many_arguments)]
    pub fn show_raw(
        message: &str,
        caption: &str,
        attach: Option<&str>,
        buttons: i32,
        icon: i32,
        default_button: i32,
        expand: bool,
        button_texts: &[&str],
    ) -> Result<MessageForm, ConfigError> {
        let buttons = ButtonSet::try_from(buttons)?;
        let icon = MessageIcon::try_from(icon)?;
        let default_button = DefaultButton::try_from(default_button)?;

        let mut request = MessageRequest::new(message)
            .with_caption(caption)
            .with_buttons(buttons)
            .with_icon(icon)
            .with_default_button(default_button)
            .with_expand(expand)
            .with_button_texts(button_texts.iter().copied());
        if let Some(attach) = attach {
            request = request.with_attach(attach);
        }
        Ok(Self::show(request))
    }

    /// Show an informational dialog: information icon, single OK button.
    pub fn show_info(
        message: &str,
        attach: Option<&str>,
        caption: Option<&str>,
        expand: bool,
        button_text: Option<&str>,
    ) -> MessageForm {
        Self::show(Self::single_button_request(
            message,
            attach,
            caption.unwrap_or(INFO_CAPTION),
            MessageIcon::Information,
            expand,
            button_text,
        ))
    }

    /// Show a warning dialog: warning icon, single OK button.
    pub fn show_warning(
        message: &str,
        attach: Option<&str>,
        caption: Option<&str>,
        expand: bool,
        button_text: Option<&str>,
    ) -> MessageForm {
        Self::show(Self::single_button_request(
            message,
            attach,
            caption.unwrap_or(WARNING_CAPTION),
            MessageIcon::Warning,
            expand,
            button_text,
        ))
    }

    /// Show a warning dialog with an error value as the attachment.
    pub fn show_warning_with(
        message: &str,
        error: &dyn std::error::Error,
        expand: bool,
    ) -> MessageForm {
        Self::show_warning(message, Some(&error.to_string()), None, expand, None)
    }

    /// Show an error dialog: error icon, single OK button.
    pub fn show_error(
        message: &str,
        attach: Option<&str>,
        caption: Option<&str>,
        expand: bool,
        button_text: Option<&str>,
    ) -> MessageForm {
        Self::show(Self::single_button_request(
            message,
            attach,
            caption.unwrap_or(ERROR_CAPTION),
            MessageIcon::Error,
            expand,
            button_text,
        ))
    }

    /// Show an error dialog with an error value as the attachment.
    pub fn show_error_with(
        message: &str,
        error: &dyn std::error::Error,
        expand: bool,
    ) -> MessageForm {
        Self::show_error(message, Some(&error.to_string()), None, expand, None)
    }

    /// Show a question dialog.
    pub fn show_question(
        message: &str,
        attach: Option<&str>,
        caption: Option<&str>,
        buttons: ButtonSet,
        default_button: DefaultButton,
        expand: bool,
        button_texts: &[&str],
    ) -> MessageForm {
        let mut request = MessageRequest::new(message)
            .with_caption(caption.unwrap_or(INFO_CAPTION))
            .with_buttons(buttons)
            .with_icon(MessageIcon::Question)
            .with_default_button(default_button)
            .with_expand(expand)
            .with_button_texts(button_texts.iter().copied());
        if let Some(attach) = attach {
            request = request.with_attach(attach);
        }
        Self::show(request)
    }

    fn single_button_request(
        message: &str,
        attach: Option<&str>,
        caption: &str,
        icon: MessageIcon,
        expand: bool,
        button_text: Option<&str>,
    ) -> MessageRequest {
        let mut request = MessageRequest::new(message)
            .with_caption(caption)
            .with_icon(icon)
            .with_expand(expand);
        if let Some(attach) = attach {
            request = request.with_attach(attach);
        }
        if let Some(text) = button_text {
            request = request.with_button_texts([text]);
        }
        request
    }
}
