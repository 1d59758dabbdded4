//! Widget base implementation.
//!
//! [`WidgetBase`] holds the state every widget shares: geometry,
//! visibility, enabled/focus/hover/pressed flags, and the object-system
//! identity (ID, parent, z-order). Widgets embed it and delegate.

use horizon_msgbox_core::{Object, ObjectBase, ObjectId, ObjectResult, Signal};
use horizon_msgbox_render::{Point, Rect, Size};

use super::geometry::SizePolicyPair;

/// How a widget can receive keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPolicy {
    /// The widget never takes focus.
    #[default]
    NoFocus,
    /// Focus via Tab navigation only.
    TabFocus,
    /// Focus via mouse click only.
    ClickFocus,
    /// Focus via both Tab and click.
    StrongFocus,
}

impl FocusPolicy {
    /// Whether Tab navigation can focus the widget.
    pub fn accepts_tab(&self) -> bool {
        matches!(self, Self::TabFocus | Self::StrongFocus)
    }

    /// Whether a mouse click can focus the widget.
    pub fn accepts_click(&self) -> bool {
        matches!(self, Self::ClickFocus | Self::StrongFocus)
    }
}

/// The base implementation for all widgets.
pub struct WidgetBase {
    /// Object-system identity and ownership.
    object_base: ObjectBase,

    /// Position relative to the parent, plus size.
    geometry: Rect,

    /// Layout behavior.
    size_policy: SizePolicyPair,

    /// How the widget takes keyboard focus.
    focus_policy: FocusPolicy,

    /// Whether the widget is visible.
    visible: bool,

    /// Whether the widget can receive input.
    enabled: bool,

    /// Whether the widget currently has keyboard focus.
    focused: bool,

    /// Whether the mouse is over the widget.
    hovered: bool,

    /// Whether a mouse button is held down on the widget.
    pressed: bool,

    /// Whether the widget needs repainting.
    needs_repaint: bool,

    /// Signal emitted when the geometry changes.
    pub geometry_changed: Signal<Rect>,

    /// Signal emitted when visibility changes.
    pub visible_changed: Signal<bool>,

    /// Signal emitted when the enabled state changes.
    pub enabled_changed: Signal<bool>,
}

impl WidgetBase {
    /// Create a new widget base.
    ///
    /// # Panics
    ///
    /// Panics if the global object registry is not initialized.
    pub fn new<T: Object + 'static>() -> Self {
        Self {
            object_base: ObjectBase::new::<T>(),
            geometry: Rect::ZERO,
            size_policy: SizePolicyPair::default(),
            focus_policy: FocusPolicy::NoFocus,
            visible: true,
            enabled: true,
            focused: false,
            hovered: false,
            pressed: false,
            needs_repaint: true,
            geometry_changed: Signal::new(),
            visible_changed: Signal::new(),
            enabled_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Object System Delegation
    // =========================================================================

    /// Get the widget's unique object ID.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }

    /// Get the widget's name.
    pub fn name(&self) -> String {
        self.object_base.name()
    }

    /// Set the widget's name.
    pub fn set_name(&self, name: impl Into<String>) {
        self.object_base.set_name(name);
    }

    /// Get the parent widget's object ID.
    pub fn parent_id(&self) -> Option<ObjectId> {
        self.object_base.parent()
    }

    /// Set the parent widget.
    pub fn set_parent(&self, parent: Option<ObjectId>) -> ObjectResult<()> {
        self.object_base.set_parent(parent)
    }

    /// Get the IDs of child widgets in z-order (back to front).
    pub fn children_ids(&self) -> Vec<ObjectId> {
        self.object_base.children()
    }

    /// Move this widget to the back of its siblings' z-order.
    pub fn send_to_back(&self) -> ObjectResult<()> {
        self.object_base.lower()
    }

    /// Move this widget to the front of its siblings' z-order.
    pub fn bring_to_front(&self) -> ObjectResult<()> {
        self.object_base.raise()
    }

    /// Get this widget's index among its siblings (0 = back).
    pub fn sibling_index(&self) -> Option<usize> {
        self.object_base.sibling_index()
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Get the widget's geometry (position and size).
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Set the widget's geometry.
    ///
    /// Emits `geometry_changed` if the geometry actually changed.
    pub fn set_geometry(&mut self, rect: Rect) {
        if self.geometry != rect {
            self.geometry = rect;
            self.needs_repaint = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// Get the widget's position relative to its parent.
    #[inline]
    pub fn pos(&self) -> Point {
        self.geometry.origin
    }

    /// Set the widget's position relative to its parent.
    pub fn set_pos(&mut self, pos: Point) {
        if self.geometry.origin != pos {
            let new_geometry = Rect {
                origin: pos,
                size: self.geometry.size,
            };
            self.geometry = new_geometry;
            self.geometry_changed.emit(new_geometry);
        }
    }

    /// Get the widget's size.
    #[inline]
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Set the widget's size.
    pub fn set_size(&mut self, size: Size) {
        if self.geometry.size != size {
            let new_geometry = Rect {
                origin: self.geometry.origin,
                size,
            };
            self.geometry = new_geometry;
            self.needs_repaint = true;
            self.geometry_changed.emit(new_geometry);
        }
    }

    /// Resize the widget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.set_size(Size::new(width, height));
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.geometry.size.width
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.geometry.size.height
    }

    /// Get the widget's local coordinate rectangle (origin at 0,0).
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.geometry.size.height)
    }

    // =========================================================================
    // Size Policy
    // =========================================================================

    /// Get the widget's size policy.
    #[inline]
    pub fn size_policy(&self) -> SizePolicyPair {
        self.size_policy
    }

    /// Set the widget's size policy.
    pub fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.size_policy = policy;
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Check if the widget is visible.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Set whether the widget is visible.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.needs_repaint = true;
            self.visible_changed.emit(visible);
        }
    }

    /// Show the widget.
    pub fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    pub fn hide(&mut self) {
        self.set_visible(false);
    }

    // =========================================================================
    // Enabled State
    // =========================================================================

    /// Check if the widget is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget is enabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.needs_repaint = true;
            self.enabled_changed.emit(enabled);
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Get the widget's focus policy.
    #[inline]
    pub fn focus_policy(&self) -> FocusPolicy {
        self.focus_policy
    }

    /// Set the widget's focus policy.
    pub fn set_focus_policy(&mut self, policy: FocusPolicy) {
        self.focus_policy = policy;
    }

    /// Check if the widget can currently receive keyboard focus.
    #[inline]
    pub fn is_focusable(&self) -> bool {
        !matches!(self.focus_policy, FocusPolicy::NoFocus) && self.enabled && self.visible
    }

    /// Check if the widget currently has keyboard focus.
    #[inline]
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Set the focused state (used by the focus management path).
    pub(crate) fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Hover / Pressed State
    // =========================================================================

    /// Check if the mouse is currently over this widget.
    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Set the hover state (used by the event dispatch path).
    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.needs_repaint = true;
        }
    }

    /// Check if a mouse button is held down on this widget.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Set the pressed state (used by the event dispatch path).
    pub(crate) fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.needs_repaint = true;
        }
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Check if the widget needs to be repainted.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Request a repaint of the widget.
    pub fn update(&mut self) {
        self.needs_repaint = true;
    }

    /// Clear the repaint flag (called after painting).
    pub fn clear_repaint_flag(&mut self) {
        self.needs_repaint = false;
    }

    // =========================================================================
    // Coordinate Mapping
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    #[inline]
    pub fn map_to_parent(&self, point: Point) -> Point {
        Point::new(
            point.x + self.geometry.origin.x,
            point.y + self.geometry.origin.y,
        )
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    #[inline]
    pub fn map_from_parent(&self, point: Point) -> Point {
        Point::new(
            point.x - self.geometry.origin.x,
            point.y - self.geometry.origin.y,
        )
    }

    /// Check if a point (in local coordinates) is inside the widget.
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        self.rect().contains(point)
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.object_base.id()
    }
}

// WidgetBase doesn't implement Drop: ObjectBase handles registry cleanup.

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_msgbox_core::init_global_registry;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Probe {
        base: WidgetBase,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                base: WidgetBase::new::<Self>(),
            }
        }
    }

    impl Object for Probe {
        fn object_id(&self) -> ObjectId {
            self.base.object_id()
        }
    }

    fn setup() {
        init_global_registry();
    }

    #[test]
    fn test_geometry_signal() {
        setup();
        let mut probe = Probe::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        probe.base.geometry_changed.connect(move |rect| {
            seen_clone.lock().push(*rect);
        });

        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        probe.base.set_geometry(rect);
        // Setting the same geometry again must not re-emit.
        probe.base.set_geometry(rect);

        assert_eq!(*seen.lock(), vec![rect]);
        assert_eq!(probe.base.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_visibility() {
        setup();
        let mut probe = Probe::new();
        assert!(probe.base.is_visible());
        probe.base.hide();
        assert!(!probe.base.is_visible());
        probe.base.show();
        assert!(probe.base.is_visible());
    }

    #[test]
    fn test_focus_policy() {
        setup();
        let mut probe = Probe::new();
        assert!(!probe.base.is_focusable());

        probe.base.set_focus_policy(FocusPolicy::StrongFocus);
        assert!(probe.base.is_focusable());
        assert!(probe.base.focus_policy().accepts_tab());
        assert!(probe.base.focus_policy().accepts_click());

        probe.base.set_enabled(false);
        assert!(!probe.base.is_focusable());
    }

    #[test]
    fn test_coordinate_mapping() {
        setup();
        let mut probe = Probe::new();
        probe.base.set_geometry(Rect::new(10.0, 20.0, 100.0, 50.0));

        let local = Point::new(5.0, 5.0);
        assert_eq!(probe.base.map_to_parent(local), Point::new(15.0, 25.0));
        assert_eq!(
            probe.base.map_from_parent(Point::new(15.0, 25.0)),
            local
        );
        assert!(probe.base.contains_point(Point::new(99.0, 49.0)));
        assert!(!probe.base.contains_point(Point::new(100.0, 50.0)));
    }
}
