//! Core widget trait definitions.
//!
//! [`Widget`] is the base trait for every UI element in the dialog layer;
//! [`PaintContext`] is the rendering context passed to [`Widget::paint`].

use horizon_msgbox_core::Object;
use horizon_msgbox_render::{Point, Rect, Renderer, Size};

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// Context provided during widget painting.
///
/// Wraps the renderer and the widget's local rectangle. The renderer is
/// already translated so that (0, 0) is the widget's top-left corner.
pub struct PaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    /// The widget's local rectangle (origin always 0,0).
    widget_rect: Rect,
    /// Whether the Alt key is held (mnemonic underlines).
    alt_held: bool,
    /// Whether to show the focus indicator.
    show_focus: bool,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(renderer: &'a mut dyn Renderer, widget_rect: Rect) -> Self {
        Self {
            renderer,
            widget_rect,
            alt_held: false,
            show_focus: false,
        }
    }

    /// Set the Alt held state (builder pattern).
    #[inline]
    pub fn with_alt_held(mut self, alt_held: bool) -> Self {
        self.alt_held = alt_held;
        self
    }

    /// Set whether to show the focus indicator (builder pattern).
    #[inline]
    pub fn with_show_focus(mut self, show_focus: bool) -> Self {
        self.show_focus = show_focus;
        self
    }

    /// Check if the Alt key is currently held.
    #[inline]
    pub fn is_alt_held(&self) -> bool {
        self.alt_held
    }

    /// Check if the focus indicator should be drawn.
    #[inline]
    pub fn should_show_focus(&self) -> bool {
        self.show_focus
    }

    /// Get the renderer.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Draw the standard focus rectangle inset into the widget bounds.
    pub fn draw_focus_indicator(&mut self, inset: f32) {
        use horizon_msgbox_render::{Color, Stroke};

        let rect = if inset > 0.0 {
            self.widget_rect.deflate(inset)
        } else {
            self.widget_rect
        };

        let stroke = Stroke::new(Color::from_rgb8(0, 120, 215), 2.0);
        self.renderer.stroke_rect(rect, &stroke);
    }
}

/// The core trait for all widgets.
///
/// Implementors provide access to their [`WidgetBase`], a [`SizeHint`] for
/// layout, and a `paint` method. Geometry, visibility and enabled accessors
/// have default implementations delegating to the base.
pub trait Widget: Object {
    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Get the widget's size hint for layout purposes.
    fn size_hint(&self) -> SizeHint;

    /// Paint the widget.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Handle a widget event.
    ///
    /// Return `true` if the event was handled and should not propagate.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }

    /// Check if this widget has a mnemonic matching `key` (lowercase).
    fn matches_mnemonic_key(&self, _key: char) -> bool {
        false
    }

    // =========================================================================
    // Geometry (delegating)
    // =========================================================================

    /// Get the widget's geometry (position and size).
    fn geometry(&self) -> Rect {
        self.widget_base().geometry()
    }

    /// Set the widget's geometry.
    fn set_geometry(&mut self, rect: Rect) {
        self.widget_base_mut().set_geometry(rect);
    }

    /// Get the widget's size.
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Set the widget's size.
    fn set_size(&mut self, size: Size) {
        self.widget_base_mut().set_size(size);
    }

    /// Get the widget's local rectangle (origin at 0,0).
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    // =========================================================================
    // Visibility / Enabled (delegating)
    // =========================================================================

    /// Check if the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Set whether the widget is visible.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Check if the widget is enabled.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Set whether the widget is enabled.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Map a point from widget-local coordinates to parent coordinates.
    fn map_to_parent(&self, point: Point) -> Point {
        self.widget_base().map_to_parent(point)
    }

    /// Map a point from parent coordinates to widget-local coordinates.
    fn map_from_parent(&self, point: Point) -> Point {
        self.widget_base().map_from_parent(point)
    }

    /// Check if a point (in local coordinates) is inside the widget.
    fn contains_point(&self, point: Point) -> bool {
        self.widget_base().contains_point(point)
    }

    /// Request a repaint of the widget.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }
}
