//! Button row layout for the dialog.
//!
//! Lays out the requested response buttons (plus the optional details
//! toggle) left to right with fixed padding and spacing. The toggle stays
//! anchored to the left edge; response buttons keep their distance from
//! the right edge when the panel is resized.

use std::sync::Arc;

use horizon_msgbox_core::{Object, ObjectId};
use horizon_msgbox_render::{Point, Rect, Size, TextMeasurer};

use crate::msgbox::{DialogResult, MessageRequest};
use crate::widget::{
    PaintContext, SizeHint, SizePolicy, SizePolicyPair, Widget, WidgetBase, WidgetEvent,
};

use super::push_button::PushButton;
use super::toggle_button::{ToggleButton, MIN_TOGGLE_SIZE};

/// Distance between the buttons and the panel edges.
const PADDING: f32 = 10.0;

/// Distance between adjacent buttons.
const SPACING: f32 = 3.0;

/// Extra gap between the toggle and the first response button.
const TOGGLE_GAP: f32 = 10.0;

/// What a point inside the panel hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    /// The details toggle button.
    Toggle,
    /// The response button at this index.
    Button(usize),
}

/// The dialog's button row.
pub struct ButtonsPanel {
    base: WidgetBase,

    /// The details toggle, present only when the dialog has an attachment.
    toggle: Option<ToggleButton>,

    /// Response buttons in left-to-right order.
    buttons: Vec<PushButton>,

    /// Index of the default button within `buttons`.
    default_index: usize,

    /// Layout x of each response button before right-anchoring.
    natural_xs: Vec<f32>,

    /// Panel width when the buttons sit at their natural positions.
    natural_width: f32,
}

impl ButtonsPanel {
    /// Build the panel for a request.
    ///
    /// The toggle is prepended when the request carries an attachment;
    /// `use_animate` selects the toggle's flat animated style.
    pub fn new(request: &MessageRequest, use_animate: bool, measurer: Arc<dyn TextMeasurer>) -> Self {
        let mut base = WidgetBase::new::<Self>();
        base.set_size_policy(SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Fixed));

        let mut width = PADDING;

        let toggle = request.has_attach().then(|| {
            let mut toggle = ToggleButton::new(use_animate).with_measurer(measurer.clone());
            // The toggle renders at its minimum size, not auto-fit.
            toggle.set_geometry(Rect::new(
                width,
                PADDING,
                MIN_TOGGLE_SIZE.width,
                MIN_TOGGLE_SIZE.height,
            ));
            width += MIN_TOGGLE_SIZE.width + SPACING + TOGGLE_GAP;
            toggle
        });

        let specs = request.button_specs();
        let last = specs.len() - 1;
        let mut buttons = Vec::with_capacity(specs.len());
        let mut natural_xs = Vec::with_capacity(specs.len());
        let mut default_index = 0;

        for (i, spec) in specs.into_iter().enumerate() {
            if spec.is_default {
                default_index = i;
            }
            let mut button = PushButton::new(spec.label, spec.result)
                .with_measurer(measurer.clone())
                .with_default(spec.is_default);
            button.auto_size();
            button.widget_base_mut().set_pos(Point::new(width, PADDING));

            natural_xs.push(width);
            width += button.size().width;
            width += if i == last { PADDING } else { SPACING };
            buttons.push(button);
        }

        let height = buttons[0].size().height + PADDING;
        base.set_size(Size::new(width, height));

        let mut panel = Self {
            base,
            toggle,
            buttons,
            default_index,
            natural_xs,
            natural_width: width,
        };
        panel.adopt_children();
        panel
    }

    fn adopt_children(&mut self) {
        let id = self.base.object_id();
        if let Some(toggle) = &self.toggle {
            let _ = toggle.widget_base().set_parent(Some(id));
        }
        for button in &self.buttons {
            let _ = button.widget_base().set_parent(Some(id));
        }
    }

    /// The response buttons in left-to-right order.
    pub fn buttons(&self) -> &[PushButton] {
        &self.buttons
    }

    /// Mutable access to a response button.
    pub fn button_mut(&mut self, index: usize) -> Option<&mut PushButton> {
        self.buttons.get_mut(index)
    }

    /// The details toggle, when present.
    pub fn toggle(&self) -> Option<&ToggleButton> {
        self.toggle.as_ref()
    }

    /// Mutable access to the details toggle.
    pub fn toggle_mut(&mut self) -> Option<&mut ToggleButton> {
        self.toggle.as_mut()
    }

    /// Index of the default button.
    pub fn default_index(&self) -> usize {
        self.default_index
    }

    /// The default response button.
    pub fn default_button(&self) -> &PushButton {
        &self.buttons[self.default_index]
    }

    /// The result produced by the default button.
    pub fn default_result(&self) -> DialogResult {
        self.default_button().result()
    }

    /// The result produced by the last (rightmost) button.
    pub fn last_result(&self) -> DialogResult {
        self.buttons[self.buttons.len() - 1].result()
    }

    /// The panel's minimum size: all buttons at natural positions.
    pub fn minimum_size(&self) -> Size {
        Size::new(self.natural_width, self.buttons[0].size().height + PADDING)
    }

    /// Re-anchor the buttons for a new panel width.
    ///
    /// Response buttons keep their distance to the right edge; the toggle
    /// keeps its distance to the left edge.
    pub fn arrange(&mut self, width: f32) {
        let dx = width - self.natural_width;
        for (button, &x) in self.buttons.iter_mut().zip(&self.natural_xs) {
            button.widget_base_mut().set_pos(Point::new(x + dx, PADDING));
        }
        let height = self.base.height();
        self.base.set_size(Size::new(width, height));
    }

    /// Find which control a panel-local point lands on.
    pub fn hit_test(&self, point: Point) -> Option<PanelHit> {
        if let Some(toggle) = &self.toggle {
            if toggle.geometry().contains(point) {
                return Some(PanelHit::Toggle);
            }
        }
        for (i, button) in self.buttons.iter().enumerate() {
            if button.geometry().contains(point) {
                return Some(PanelHit::Button(i));
            }
        }
        None
    }

    /// Update hover feedback: `hit` is the control under the pointer.
    pub fn update_hover(&mut self, hit: Option<PanelHit>) {
        if let Some(toggle) = &mut self.toggle {
            toggle
                .widget_base_mut()
                .set_hovered(hit == Some(PanelHit::Toggle));
        }
        for (i, button) in self.buttons.iter_mut().enumerate() {
            button
                .widget_base_mut()
                .set_hovered(hit == Some(PanelHit::Button(i)));
        }
    }

    /// Find the control with a mnemonic matching `key`.
    pub fn mnemonic_target(&self, key: char) -> Option<PanelHit> {
        if let Some(toggle) = &self.toggle {
            if toggle.matches_mnemonic_key(key) {
                return Some(PanelHit::Toggle);
            }
        }
        self.buttons
            .iter()
            .position(|b| b.matches_mnemonic_key(key))
            .map(PanelHit::Button)
    }
}

impl Object for ButtonsPanel {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for ButtonsPanel {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::new(self.base.size()).with_minimum(self.minimum_size())
    }

    fn paint(&self, _ctx: &mut PaintContext<'_>) {
        // The panel is a layout container; the buttons paint themselves.
    }

    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        // Input is routed to the individual buttons by the dialog.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msgbox::{ButtonSet, DefaultButton};
    use horizon_msgbox_core::init_global_registry;
    use horizon_msgbox_render::MetricTextMeasurer;

    fn setup() -> Arc<MetricTextMeasurer> {
        init_global_registry();
        Arc::new(MetricTextMeasurer::default())
    }

    fn panel(request: &MessageRequest) -> ButtonsPanel {
        let measurer = setup();
        ButtonsPanel::new(request, true, measurer)
    }

    #[test]
    fn test_ok_cancel_layout() {
        let p = panel(&MessageRequest::new("m").with_buttons(ButtonSet::OkCancel));

        assert!(p.toggle().is_none());
        assert_eq!(p.buttons().len(), 2);
        assert_eq!(p.buttons()[0].result(), DialogResult::Ok);
        assert_eq!(p.buttons()[1].result(), DialogResult::Cancel);

        // Both labels are short: both buttons at the 85px floor.
        // width = 10 + 85 + 3 + 85 + 10
        assert_eq!(p.size().width, 193.0);
        assert_eq!(p.size().height, 27.0 + 10.0);
        assert_eq!(p.buttons()[0].geometry().left(), 10.0);
        assert_eq!(p.buttons()[1].geometry().left(), 98.0);
    }

    #[test]
    fn test_toggle_prepended_with_extra_gap() {
        let p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::Ok)
                .with_attach("details"),
        );

        let toggle = p.toggle().expect("toggle present");
        assert_eq!(toggle.geometry(), Rect::new(10.0, 10.0, 93.0, 27.0));

        // 10 + 93 + 3 + 10 (extra gap) = 116
        assert_eq!(p.buttons()[0].geometry().left(), 116.0);
        assert_eq!(p.size().width, 116.0 + 85.0 + 10.0);
    }

    #[test]
    fn test_default_button_flag() {
        let p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::YesNoCancel)
                .with_default_button(DefaultButton::Button2),
        );

        assert_eq!(p.default_index(), 1);
        assert!(p.buttons()[1].is_default());
        assert!(!p.buttons()[0].is_default());
        assert_eq!(p.default_result(), DialogResult::No);
        assert_eq!(p.last_result(), DialogResult::Cancel);
    }

    #[test]
    fn test_override_text_widens_button() {
        let p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::OkCancel)
                .with_button_texts(["Apply these settings permanently"]),
        );

        assert!(p.buttons()[0].size().width > 85.0);
        assert_eq!(p.buttons()[1].size().width, 85.0);
        // Spacing is preserved between the widened button and the next.
        let gap = p.buttons()[1].geometry().left() - p.buttons()[0].geometry().right();
        assert_eq!(gap, SPACING);
    }

    #[test]
    fn test_arrange_anchors_buttons_right() {
        let mut p = panel(&MessageRequest::new("m").with_buttons(ButtonSet::OkCancel));
        let natural_width = p.size().width;
        let right_margin = natural_width - p.buttons()[1].geometry().right();

        p.arrange(natural_width + 120.0);
        assert_eq!(p.size().width, natural_width + 120.0);
        assert_eq!(
            p.size().width - p.buttons()[1].geometry().right(),
            right_margin
        );

        // Shrinking back restores the natural layout.
        p.arrange(natural_width);
        assert_eq!(p.buttons()[0].geometry().left(), 10.0);
    }

    #[test]
    fn test_toggle_stays_left_on_arrange() {
        let mut p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::OkCancel)
                .with_attach("x"),
        );
        p.arrange(p.size().width + 200.0);
        assert_eq!(p.toggle().unwrap().geometry().left(), 10.0);
    }

    #[test]
    fn test_hit_test() {
        let p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::OkCancel)
                .with_attach("x"),
        );

        assert_eq!(p.hit_test(Point::new(20.0, 20.0)), Some(PanelHit::Toggle));
        assert_eq!(
            p.hit_test(Point::new(120.0, 20.0)),
            Some(PanelHit::Button(0))
        );
        assert_eq!(p.hit_test(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn test_update_hover() {
        let mut p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::OkCancel)
                .with_attach("x"),
        );

        p.update_hover(Some(PanelHit::Button(1)));
        assert!(p.buttons()[1].widget_base().is_hovered());
        assert!(!p.buttons()[0].widget_base().is_hovered());
        assert!(!p.toggle().unwrap().widget_base().is_hovered());

        p.update_hover(None);
        assert!(!p.buttons()[1].widget_base().is_hovered());
    }

    #[test]
    fn test_mnemonic_target() {
        let p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::YesNo)
                .with_attach("x"),
        );

        assert_eq!(p.mnemonic_target('d'), Some(PanelHit::Toggle));
        assert_eq!(p.mnemonic_target('y'), Some(PanelHit::Button(0)));
        assert_eq!(p.mnemonic_target('n'), Some(PanelHit::Button(1)));
        assert_eq!(p.mnemonic_target('q'), None);
    }

    #[test]
    fn test_children_adopted() {
        let p = panel(
            &MessageRequest::new("m")
                .with_buttons(ButtonSet::OkCancel)
                .with_attach("x"),
        );
        // Toggle plus two buttons are owned children of the panel.
        assert_eq!(p.widget_base().children_ids().len(), 3);
    }
}
