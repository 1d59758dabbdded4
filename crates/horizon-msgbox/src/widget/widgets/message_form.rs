//! The message dialog: assembly, sizing and the expand/collapse state
//! machine.
//!
//! `MessageForm` owns the three panels ([`MessageViewer`], [`ButtonsPanel`],
//! [`AttachPanel`]) plus the details toggle, created bottom-up at
//! construction and destroyed with the form. The window's minimum size
//! comes from the panels' minimums; the initial client size asks the
//! viewer for its preferred size under a capped width and the working-area
//! height. The toggle drives a two-state transition that re-docks the
//! panels, changes the window height (animated when enabled) and shows or
//! hides the details region.
//!
//! Forms are single-use: construct, [`open`](MessageForm::open), let the
//! host loop deliver input and step any in-flight animation, observe
//! `finished`.

use std::sync::Arc;

use horizon_msgbox_core::{Object, ObjectId, Signal};
use horizon_msgbox_render::{Color, Point, Renderer, Size, TextMeasurer};

use crate::msgbox::{ButtonSet, DialogResult, MessageRequest};
use crate::platform::sound::{self, SystemSound};
use crate::widget::animation::ResizeAnimation;
use crate::widget::layout::{ContentMargins, Dock, DockLayout};
use crate::widget::modal::ModalManager;
use crate::widget::{Key, PaintContext, SizeHint, Widget, WidgetBase, WidgetEvent};

use super::attach_panel::AttachPanel;
use super::buttons_panel::{ButtonsPanel, PanelHit};
use super::message_viewer::MessageViewer;

/// Maximum default client width of the dialog.
pub const MAX_CLIENT_WIDTH: f32 = 700.0;

/// Smallest height the details region may open at.
const EXPAND_HEIGHT_FLOOR: f32 = 150.0;

/// Where the dialog appears on first show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPosition {
    /// Centered on the screen.
    #[default]
    CenterScreen,
    /// Centered over the parent window.
    CenterParent,
}

/// Host-screen facts the form sizes itself against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    /// The usable desktop area.
    pub work_area: Size,
    /// Total non-client chrome (borders plus title bar).
    pub frame: Size,
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        Self {
            work_area: Size::new(1280.0, 800.0),
            frame: Size::new(16.0, 39.0),
        }
    }
}

/// The message dialog window.
pub struct MessageForm {
    base: WidgetBase,

    caption: String,
    buttons_kind: ButtonSet,

    /// Behavior flags, read once at construction.
    use_animate: bool,
    use_sound: bool,

    /// The notification sound for this dialog's icon.
    sound: SystemSound,

    has_attach: bool,
    expand_on_load: bool,

    viewer: MessageViewer,
    buttons_panel: ButtonsPanel,
    attach_panel: Option<AttachPanel>,

    /// Window content padding; the bottom band hosts the size grip.
    padding: ContentMargins,

    /// Minimum outer window size.
    min_window_size: Size,
    metrics: ScreenMetrics,

    /// Remembered details height; read through [`expand_height`], which
    /// floors it.
    ///
    /// [`expand_height`]: MessageForm::expand_height
    expand_height: f32,

    viewer_dock: Dock,
    buttons_dock: Dock,

    /// The attach panel becomes visible when the current transition lands.
    pending_show_attach: bool,
    /// The collapsed docking applies when the current transition lands.
    pending_collapse_docks: bool,

    animation: Option<ResizeAnimation>,

    result: DialogResult,
    is_open: bool,
    top_most: bool,
    minimized: bool,
    start_position: StartPosition,

    /// The control a mouse press landed on, for click matching.
    pressed_target: Option<PanelHit>,

    /// Index of the response button holding focus.
    focused_button: Option<usize>,

    /// Signal emitted when the dialog is closed, with the pressed button's
    /// result.
    pub finished: Signal<DialogResult>,

    /// Signal emitted just before the dialog becomes visible.
    pub about_to_show: Signal<()>,

    /// Signal emitted when the details region expands or collapses.
    pub expanded_changed: Signal<bool>,
}

impl MessageForm {
    /// Build the dialog for `request`.
    ///
    /// `use_animate` and `use_sound` are the process-wide flags sampled by
    /// the caller; the form keeps them for its whole lifetime.
    pub fn new(
        request: MessageRequest,
        use_animate: bool,
        use_sound: bool,
        measurer: Arc<dyn TextMeasurer>,
        metrics: ScreenMetrics,
    ) -> Self {
        let base = WidgetBase::new::<Self>();
        let has_attach = request.has_attach();

        let viewer = MessageViewer::new(request.message(), request.icon(), measurer.clone());
        let buttons_panel = ButtonsPanel::new(&request, use_animate, measurer.clone());
        let attach_panel = request
            .attach()
            .map(|attach| AttachPanel::new(attach, measurer.clone()));

        let form_id = base.object_id();
        let _ = viewer.widget_base().set_parent(Some(form_id));
        let _ = buttons_panel.widget_base().set_parent(Some(form_id));
        if let Some(attach) = &attach_panel {
            let _ = attach.widget_base().set_parent(Some(form_id));
        }

        let padding = ContentMargins::new(0.0, 0.0, 0.0, 17.0);

        let buttons_min = buttons_panel.minimum_size();
        let viewer_min = viewer.minimum_size();
        let client_min = Size::new(
            buttons_min.width + padding.horizontal(),
            viewer_min.height + buttons_min.height + padding.vertical(),
        );
        let min_window_size = Size::new(
            client_min.width + metrics.frame.width,
            client_min.height + metrics.frame.height,
        );

        let mut form = Self {
            base,
            caption: request.caption().to_owned(),
            buttons_kind: request.buttons(),
            use_animate,
            use_sound,
            sound: request.icon().sound(),
            has_attach,
            expand_on_load: request.expand(),
            viewer,
            buttons_panel,
            attach_panel,
            padding,
            min_window_size,
            metrics,
            expand_height: 0.0,
            viewer_dock: Dock::Fill,
            buttons_dock: Dock::Bottom,
            pending_show_attach: false,
            pending_collapse_docks: false,
            animation: None,
            result: DialogResult::None,
            is_open: false,
            top_most: true,
            minimized: false,
            start_position: StartPosition::CenterScreen,
            pressed_target: None,
            focused_button: None,
            finished: Signal::new(),
            about_to_show: Signal::new(),
            expanded_changed: Signal::new(),
        };

        // Initial client size: the viewer's preference under the width cap
        // and the working area, floored at the minimum.
        let proposed = Size::new(
            MAX_CLIENT_WIDTH,
            form.metrics.work_area.height - form.metrics.frame.height,
        );
        let preferred = form.get_preferred_size(proposed);
        let client = Size::new(
            preferred.width.max(client_min.width),
            preferred.height.max(client_min.height),
        );
        form.base.set_size(client);
        form.relayout();
        form
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// The window caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// The button combination this dialog was built with.
    pub fn buttons(&self) -> ButtonSet {
        self.buttons_kind
    }

    /// The message area.
    pub fn viewer(&self) -> &MessageViewer {
        &self.viewer
    }

    /// The button row.
    pub fn buttons_panel(&self) -> &ButtonsPanel {
        &self.buttons_panel
    }

    /// The details panel, when the dialog has an attachment.
    pub fn attach_panel(&self) -> Option<&AttachPanel> {
        self.attach_panel.as_ref()
    }

    /// The dialog result so far (`None` until a button is pressed).
    pub fn result(&self) -> DialogResult {
        self.result
    }

    /// Whether the dialog is currently open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the dialog still has the always-on-top hint.
    ///
    /// Set while opening, dropped after first show so the dialog behaves
    /// like a normal modal afterwards.
    pub fn is_top_most(&self) -> bool {
        self.top_most
    }

    /// Where the dialog appears on first show.
    pub fn start_position(&self) -> StartPosition {
        self.start_position
    }

    /// Set where the dialog appears on first show.
    pub fn set_start_position(&mut self, position: StartPosition) {
        self.start_position = position;
    }

    /// Whether the host should offer a window close control.
    ///
    /// Suppressed entirely when the button set has no Cancel-equivalent.
    pub fn close_button_enabled(&self) -> bool {
        self.buttons_kind.has_cancel()
    }

    /// Tell the form it was minimized or restored.
    ///
    /// Minimization zeroes child heights without meaning "collapse", so
    /// the forced-collapse path is suspended while minimized.
    pub fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }

    /// The client (content) size.
    pub fn client_size(&self) -> Size {
        self.base.size()
    }

    /// The outer window size including chrome.
    pub fn window_size(&self) -> Size {
        let client = self.client_size();
        Size::new(
            client.width + self.metrics.frame.width,
            client.height + self.metrics.frame.height,
        )
    }

    /// The minimum outer window size.
    pub fn min_window_size(&self) -> Size {
        self.min_window_size
    }

    /// The index of the focused response button, if any.
    pub fn focused_button(&self) -> Option<usize> {
        self.focused_button
    }

    /// Whether the details region is currently expanded.
    pub fn is_expanded(&self) -> bool {
        self.buttons_panel
            .toggle()
            .is_some_and(|toggle| toggle.is_checked())
    }

    /// The height the details region opens at, floored so a remembered
    /// sliver can never produce a degenerate panel.
    pub fn expand_height(&self) -> f32 {
        if self.expand_height < EXPAND_HEIGHT_FLOOR {
            EXPAND_HEIGHT_FLOOR
        } else {
            self.expand_height
        }
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    /// Compute the client size the dialog wants, where `proposed` is the
    /// largest client size it may take.
    pub fn get_preferred_size(&self, proposed: Size) -> Size {
        let reserved = self.buttons_panel.size().height + self.padding.bottom;
        let mut size = self
            .viewer
            .preferred_size(Size::new(proposed.width, proposed.height - reserved));
        size.height += reserved;
        size
    }

    /// Resize the client area, clamped to the minimum, re-docking children.
    pub fn set_client_size(&mut self, size: Size) {
        let min = self.min_client_size();
        self.base.set_size(Size::new(
            size.width.max(min.width),
            size.height.max(min.height),
        ));
        self.relayout();
    }

    fn min_client_size(&self) -> Size {
        Size::new(
            self.min_window_size.width - self.metrics.frame.width,
            self.min_window_size.height - self.metrics.frame.height,
        )
    }

    fn set_client_height(&mut self, height: f32) {
        let width = self.base.width();
        self.base.set_size(Size::new(width, height));
        self.relayout();
    }

    /// Re-dock the children inside the current client area.
    fn relayout(&mut self) {
        let bounds = self.base.rect();
        let layout = DockLayout::with_margins(self.padding);
        let buttons_height = self.buttons_panel.size().height;

        if self.viewer_dock == Dock::Top {
            // Expanded arrangement: viewer and buttons pinned to the top,
            // the details region filling what grows below them.
            let rects = layout.arrange(
                bounds,
                &[
                    (self.viewer_dock, self.viewer.size().height),
                    (self.buttons_dock, buttons_height),
                    (Dock::Fill, 0.0),
                ],
            );
            self.viewer.set_geometry(rects[0]);
            self.buttons_panel.set_geometry(rects[1]);
            self.buttons_panel.arrange(rects[1].width());
            if let Some(attach) = &mut self.attach_panel {
                attach.widget_base_mut().set_pos(rects[2].origin);
                attach.set_panel_size(rects[2].size);
            }
            // The details region resizing to nothing doubles as the
            // user's collapse gesture.
            self.check_forced_collapse();
        } else {
            // Collapsed arrangement: buttons along the bottom, the viewer
            // filling the rest.
            let rects = layout.arrange(
                bounds,
                &[(self.buttons_dock, buttons_height), (self.viewer_dock, 0.0)],
            );
            self.buttons_panel.set_geometry(rects[0]);
            self.buttons_panel.arrange(rects[0].width());
            self.viewer.set_geometry(rects[1]);
        }
    }

    /// Collapse through the toggle when the details region has been
    /// drained to zero height while expanded.
    fn check_forced_collapse(&mut self) {
        if self.minimized {
            return;
        }
        let checked = self
            .buttons_panel
            .toggle()
            .is_some_and(|toggle| toggle.is_checked());
        let drained = self
            .attach_panel
            .as_ref()
            .is_some_and(|attach| attach.is_visible() && attach.height() == 0.0);
        if checked && drained {
            self.set_details_expanded(false);
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open the dialog modally.
    ///
    /// Runs the load and shown phases: an initial-expand request is applied
    /// with animation disabled (the first expansion is instantaneous), the
    /// default button takes focus, the icon's sound plays when enabled, and
    /// the always-on-top hint drops.
    pub fn open(&mut self) {
        if self.is_open {
            return;
        }

        if self.has_attach && self.expand_on_load {
            let animate = self.use_animate;
            self.use_animate = false;
            self.set_details_expanded(true);
            self.use_animate = animate;
        }

        self.is_open = true;
        ModalManager::push_modal(self.object_id());
        self.about_to_show.emit(());
        tracing::debug!(target: "horizon_msgbox::form", caption = %self.caption, "dialog opened");

        // Focus only takes once the window is displayed.
        self.focus_default_button();

        if self.use_sound {
            sound::play(self.sound);
        }

        self.top_most = false;
    }

    fn focus_default_button(&mut self) {
        let index = self.buttons_panel.default_index();
        if let Some(previous) = self.focused_button.take() {
            if let Some(button) = self.buttons_panel.button_mut(previous) {
                button.widget_base_mut().set_focused(false);
            }
        }
        if let Some(button) = self.buttons_panel.button_mut(index) {
            button.widget_base_mut().set_focused(true);
            self.focused_button = Some(index);
        }
    }

    /// Close the dialog without a button press.
    pub fn close(&mut self) {
        self.done(DialogResult::None);
    }

    /// Ask the dialog to close as if its window close control was used.
    ///
    /// Refused (returns `false`) when the close control is suppressed.
    pub fn request_close(&mut self) -> bool {
        if !self.close_button_enabled() {
            return false;
        }
        self.done(self.buttons_panel.last_result());
        true
    }

    fn done(&mut self, result: DialogResult) {
        if !self.is_open {
            return;
        }
        self.result = result;
        self.is_open = false;
        ModalManager::pop_modal(self.object_id());
        tracing::debug!(target: "horizon_msgbox::form", ?result, "dialog finished");
        self.finished.emit(result);
    }

    /// Press the response button at `index`.
    pub fn click_button(&mut self, index: usize) {
        let Some(button) = self.buttons_panel.button_mut(index) else {
            return;
        };
        let result = button.result();
        button.click();
        self.done(result);
    }

    // =========================================================================
    // Expand / Collapse
    // =========================================================================

    /// Activate the details toggle, as a user click would.
    pub fn toggle_details(&mut self) {
        let Some(toggle) = self.buttons_panel.toggle_mut() else {
            return;
        };
        toggle.perform_click();
        let checked = toggle.is_checked();
        self.on_toggle_changed(checked);
    }

    /// Set the details-expanded state through the toggle.
    pub fn set_details_expanded(&mut self, expanded: bool) {
        let Some(toggle) = self.buttons_panel.toggle_mut() else {
            return;
        };
        if toggle.is_checked() == expanded {
            return;
        }
        toggle.set_checked(expanded);
        self.on_toggle_changed(expanded);
    }

    fn on_toggle_changed(&mut self, checked: bool) {
        // A transition in flight always lands before the next one starts.
        self.complete_animation();

        if checked {
            // The details region appears above the buttons in z-order.
            let _ = self.buttons_panel.widget_base().send_to_back();
            let _ = self.viewer.widget_base().send_to_back();

            self.viewer_dock = Dock::Top;
            self.buttons_dock = Dock::Top;

            self.pending_show_attach = true;
            let grow = self.expand_height();
            self.change_height(grow);
        } else if self.attach_panel.is_some() {
            // Remember the live height for the next expansion, then shrink
            // by exactly that height (not the remembered one) so the
            // window returns to its pre-expansion size without drift.
            let current = self
                .attach_panel
                .as_ref()
                .map(|attach| attach.height())
                .unwrap_or(0.0);
            self.expand_height = current;
            if let Some(attach) = &mut self.attach_panel {
                attach.widget_base_mut().set_visible(false);
            }
            self.pending_collapse_docks = true;
            self.change_height(-current);
        }

        if !self.is_animating() {
            self.finish_transition();
        }
        self.expanded_changed.emit(checked);
    }

    /// Change the window height by a signed delta, animated when enabled.
    fn change_height(&mut self, delta: f32) {
        let current = self.base.height();
        if self.use_animate {
            self.animation = Some(ResizeAnimation::new(current, delta));
        } else {
            self.set_client_height(current + delta);
        }
    }

    /// Whether an expand/collapse animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Advance an in-flight animation by one frame.
    ///
    /// The host calls this on the [`ResizeAnimation::FRAME_INTERVAL`]
    /// cadence. Returns `false` once no animation remains.
    pub fn step_animation(&mut self) -> bool {
        let Some(animation) = &mut self.animation else {
            return false;
        };
        match animation.next_height() {
            Some(height) => {
                let finished = animation.is_finished();
                self.set_client_height(height);
                if finished {
                    self.animation = None;
                    self.finish_transition();
                }
                true
            }
            None => {
                self.animation = None;
                self.finish_transition();
                false
            }
        }
    }

    /// Step an in-flight animation to its end.
    ///
    /// Animations cannot be cancelled; hosts without a timer call this to
    /// land on the exact target height immediately.
    pub fn complete_animation(&mut self) {
        while self.step_animation() {}
    }

    fn finish_transition(&mut self) {
        if self.pending_collapse_docks {
            self.pending_collapse_docks = false;
            let _ = self.buttons_panel.widget_base().send_to_back();
            self.buttons_dock = Dock::Bottom;
            self.viewer_dock = Dock::Fill;
        }
        if self.pending_show_attach {
            self.pending_show_attach = false;
            if let Some(attach) = &mut self.attach_panel {
                attach.widget_base_mut().set_visible(true);
            }
        }
        self.relayout();
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn handle_key_press(&mut self, event: &crate::widget::KeyPressEvent) -> bool {
        // Mnemonics: Alt+key activates the matching control.
        if event.modifiers.alt {
            if let Some(key) = event.key.to_char() {
                if let Some(hit) = self.buttons_panel.mnemonic_target(key) {
                    self.activate(hit);
                    return true;
                }
            }
            return false;
        }

        match event.key {
            Key::Enter if !event.is_repeat => {
                self.click_button(self.buttons_panel.default_index());
                true
            }
            Key::Escape if self.buttons_kind.allows_escape() => {
                self.click_button(self.buttons_panel.buttons().len() - 1);
                true
            }
            _ => {
                // Unhandled keys go to the details region when visible.
                if let Some(attach) = &mut self.attach_panel {
                    if attach.is_visible() {
                        let mut forwarded = WidgetEvent::KeyPress(event.clone());
                        return attach.event(&mut forwarded);
                    }
                }
                false
            }
        }
    }

    fn activate(&mut self, hit: PanelHit) {
        match hit {
            PanelHit::Toggle => self.toggle_details(),
            PanelHit::Button(index) => self.click_button(index),
        }
    }

    /// Translate a form-local point to a buttons-panel hit.
    fn panel_hit(&self, local_pos: Point) -> Option<PanelHit> {
        let panel_point = self.buttons_panel.map_from_parent(local_pos);
        self.buttons_panel.hit_test(panel_point)
    }
}

impl Object for MessageForm {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for MessageForm {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.base.size()).with_minimum(self.min_client_size())
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        // The panels paint themselves; the form supplies the backdrop.
        let rect = ctx.rect();
        ctx.renderer().fill_rect(rect, Color::from_rgb8(240, 240, 240));
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if !self.is_open {
            return false;
        }

        match event {
            WidgetEvent::KeyPress(e) => {
                let e = e.clone();
                self.handle_key_press(&e)
            }
            WidgetEvent::MousePress(e) => {
                let hit = self.panel_hit(e.local_pos);
                self.pressed_target = hit;
                hit.is_some()
            }
            WidgetEvent::MouseRelease(e) => {
                let hit = self.panel_hit(e.local_pos);
                let pressed = self.pressed_target.take();
                match hit {
                    Some(hit) if pressed == Some(hit) => {
                        self.activate(hit);
                        true
                    }
                    _ => false,
                }
            }
            WidgetEvent::MouseMove(e) => {
                let hit = self.panel_hit(e.local_pos);
                self.buttons_panel.update_hover(hit);
                false
            }
            WidgetEvent::Resize(e) => {
                let new_size = e.new_size;
                self.set_client_size(new_size);
                true
            }
            _ => false,
        }
    }
}

impl Drop for MessageForm {
    fn drop(&mut self) {
        // Release every exit path, including a form dropped while open.
        if self.is_open {
            ModalManager::pop_modal(self.object_id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgbox::{MessageIcon, MessageRequest};
    use horizon_msgbox_core::init_global_registry;
    use horizon_msgbox_render::MetricTextMeasurer;

    fn form(request: MessageRequest, animate: bool) -> MessageForm {
        init_global_registry();
        MessageForm::new(
            request,
            animate,
            false,
            Arc::new(MetricTextMeasurer::default()),
            ScreenMetrics::default(),
        )
    }

    fn attach_request() -> MessageRequest {
        MessageRequest::new("Something went wrong.")
            .with_caption("Error")
            .with_icon(MessageIcon::Error)
            .with_attach("stack trace line 1\nline 2")
    }

    #[test]
    fn test_initial_layout_collapsed() {
        let f = form(attach_request(), false);

        assert!(!f.is_expanded());
        assert!(!f.attach_panel().unwrap().is_visible());
        assert!(f.client_size().width <= MAX_CLIENT_WIDTH);

        // Buttons sit at the bottom above the padding band, viewer fills
        // the rest.
        let client = f.client_size();
        let buttons = f.buttons_panel().geometry();
        assert_eq!(buttons.bottom(), client.height - 17.0);
        let viewer = f.viewer().geometry();
        assert_eq!(viewer.top(), 0.0);
        assert_eq!(viewer.bottom(), buttons.top());
    }

    #[test]
    fn test_min_window_size() {
        let f = form(attach_request(), false);
        let metrics = ScreenMetrics::default();

        let buttons_min = f.buttons_panel().minimum_size();
        let viewer_min = f.viewer().minimum_size();
        let expected = Size::new(
            buttons_min.width + metrics.frame.width,
            viewer_min.height + buttons_min.height + 17.0 + metrics.frame.height,
        );
        assert_eq!(f.min_window_size(), expected);

        // Window size = client size plus chrome.
        let window = f.window_size();
        let client = f.client_size();
        assert_eq!(window.width, client.width + metrics.frame.width);
        assert_eq!(window.height, client.height + metrics.frame.height);
    }

    #[test]
    fn test_preferred_size_adds_button_row() {
        let f = form(MessageRequest::new("A short message."), false);
        let proposed = Size::new(MAX_CLIENT_WIDTH, 700.0);
        let reserved = f.buttons_panel().size().height + 17.0;
        let viewer_pref = f
            .viewer()
            .preferred_size(Size::new(proposed.width, proposed.height - reserved));
        let preferred = f.get_preferred_size(proposed);
        assert_eq!(preferred.height, viewer_pref.height + reserved);
        assert_eq!(preferred.width, viewer_pref.width);
    }

    #[test]
    fn test_expand_uses_floor_height_first_time() {
        let mut f = form(attach_request(), false);
        let before = f.client_size().height;

        f.toggle_details();

        assert!(f.is_expanded());
        assert!(f.attach_panel().unwrap().is_visible());
        assert_eq!(f.client_size().height, before + 150.0);
    }

    #[test]
    fn test_expanded_docking() {
        let mut f = form(attach_request(), false);
        f.toggle_details();

        // Viewer pinned to the top, buttons directly below it, details
        // filling the remainder above the bottom padding.
        let viewer = f.viewer().geometry();
        let buttons = f.buttons_panel().geometry();
        let attach = f.attach_panel().unwrap().widget_base().geometry();

        assert_eq!(viewer.top(), 0.0);
        assert_eq!(buttons.top(), viewer.bottom());
        assert_eq!(attach.top(), buttons.bottom());
        assert_eq!(attach.height(), 150.0);
        assert_eq!(attach.bottom(), f.client_size().height - 17.0);
    }

    #[test]
    fn test_z_order_on_expand() {
        let mut f = form(attach_request(), false);
        let attach_id = f.attach_panel().unwrap().object_id();
        f.toggle_details();

        // Buttons panel and viewer were sent to the back; the details
        // panel is frontmost.
        let children = f.widget_base().children_ids();
        assert_eq!(children.last().copied(), Some(attach_id));
    }

    #[test]
    fn test_collapse_restores_height_exactly() {
        let mut f = form(attach_request(), false);
        let before = f.client_size().height;

        f.toggle_details();
        f.toggle_details();

        assert!(!f.is_expanded());
        assert_eq!(f.client_size().height, before);
        assert!(!f.attach_panel().unwrap().is_visible());

        // Docking is back to the collapsed arrangement.
        let buttons = f.buttons_panel().geometry();
        assert_eq!(buttons.bottom(), f.client_size().height - 17.0);
    }

    #[test]
    fn test_collapse_remembers_live_height() {
        let mut f = form(attach_request(), false);
        let before = f.client_size().height;
        f.toggle_details();

        // The user grows the window; the details region absorbs the room.
        let grown = f.client_size();
        f.set_client_size(Size::new(grown.width, grown.height + 70.0));
        assert_eq!(f.attach_panel().unwrap().height(), 220.0);

        // Collapsing shrinks by the live height, landing back exactly on
        // the pre-expansion height.
        f.toggle_details();
        assert_eq!(f.client_size().height, before);

        // The next expansion reuses the remembered 220.
        f.toggle_details();
        assert_eq!(f.client_size().height, before + 220.0);
    }

    #[test]
    fn test_remembered_sliver_is_floored() {
        let mut f = form(attach_request(), false);
        f.toggle_details();

        // Drain the details region down to a 40px sliver, then collapse.
        let grown = f.client_size();
        f.set_client_size(Size::new(grown.width, grown.height - 110.0));
        assert_eq!(f.attach_panel().unwrap().height(), 40.0);
        f.toggle_details();

        // 40 was remembered but the floor applies on the next expansion.
        assert_eq!(f.expand_height(), 150.0);
    }

    #[test]
    fn test_forced_collapse_when_drained_to_zero() {
        let mut f = form(attach_request(), false);
        f.toggle_details();
        assert!(f.is_expanded());

        // Shrinking the window until the details region has no height
        // collapses the dialog through the toggle.
        let grown = f.client_size();
        f.set_client_size(Size::new(grown.width, grown.height - 150.0));

        assert!(!f.is_expanded());
        assert!(!f.attach_panel().unwrap().is_visible());
    }

    #[test]
    fn test_minimize_exempt_from_forced_collapse() {
        let mut f = form(attach_request(), false);
        f.toggle_details();
        f.set_minimized(true);

        let grown = f.client_size();
        f.set_client_size(Size::new(grown.width, grown.height - 150.0));

        assert!(f.is_expanded());
    }

    #[test]
    fn test_no_toggle_without_attach() {
        let mut f = form(MessageRequest::new("plain"), false);
        assert!(f.buttons_panel().toggle().is_none());
        assert!(f.attach_panel().is_none());

        // Toggling is a no-op.
        let height = f.client_size().height;
        f.toggle_details();
        assert_eq!(f.client_size().height, height);
    }

    #[test]
    fn test_animated_expand_lands_exactly() {
        let mut f = form(attach_request(), true);
        let before = f.client_size().height;

        f.toggle_details();
        assert!(f.is_animating());
        // The details region stays hidden until the animation lands.
        assert!(!f.attach_panel().unwrap().is_visible());

        let mut frames = 0;
        while f.step_animation() {
            frames += 1;
        }
        assert_eq!(frames, ResizeAnimation::FRAMES);
        assert!(!f.is_animating());
        assert!(f.attach_panel().unwrap().is_visible());
        assert_eq!(f.client_size().height, before + 150.0);
    }

    #[test]
    fn test_animated_round_trip_is_exact() {
        let mut f = form(attach_request(), true);
        let before = f.client_size().height;

        f.toggle_details();
        f.complete_animation();
        f.toggle_details();
        f.complete_animation();

        assert_eq!(f.client_size().height, before);
    }

    #[test]
    fn test_resize_keeps_buttons_anchored() {
        let mut f = form(attach_request(), false);
        let client = f.client_size();

        f.set_client_size(Size::new(client.width + 100.0, client.height + 60.0));

        let buttons = f.buttons_panel().geometry();
        assert_eq!(buttons.bottom(), f.client_size().height - 17.0);
        let last = f.buttons_panel().buttons().last().unwrap().geometry();
        // The rightmost button hugs the right edge at the fixed padding.
        assert_eq!(buttons.width() - last.right(), 10.0);

        // Toggle stays pinned left.
        assert_eq!(f.buttons_panel().toggle().unwrap().geometry().left(), 10.0);
    }

    #[test]
    fn test_set_client_size_clamped_to_minimum() {
        let mut f = form(attach_request(), false);
        f.set_client_size(Size::new(1.0, 1.0));

        let metrics = ScreenMetrics::default();
        assert_eq!(
            f.client_size().width,
            f.min_window_size().width - metrics.frame.width
        );
    }

    #[test]
    fn test_close_button_suppression() {
        use crate::msgbox::ButtonSet;
        let cases = [
            (ButtonSet::Ok, false),
            (ButtonSet::OkCancel, true),
            (ButtonSet::AbortRetryIgnore, false),
            (ButtonSet::YesNoCancel, true),
            (ButtonSet::YesNo, false),
            (ButtonSet::RetryCancel, true),
        ];
        for (set, enabled) in cases {
            let f = form(MessageRequest::new("m").with_buttons(set), false);
            assert_eq!(f.close_button_enabled(), enabled, "{set:?}");
        }
    }
}
