//! Edge-docking layout.
//!
//! Arranges children against the edges of a container: each docked child
//! consumes a slice of the remaining area in declaration order, and a
//! `Fill` child takes whatever is left. This is the arrangement the dialog
//! uses for its three panels, and it is what keeps them stable while the
//! window is resized or the details region expands.

use horizon_msgbox_render::Rect;

use super::ContentMargins;

/// Which edge a child docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dock {
    /// Not docked: the child keeps its own geometry.
    #[default]
    None,
    /// Docked to the top edge, full width.
    Top,
    /// Docked to the bottom edge, full width.
    Bottom,
    /// Fills the remaining area.
    Fill,
}

/// Computes docked child rectangles inside a container.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockLayout {
    margins: ContentMargins,
}

impl DockLayout {
    /// Create a dock layout with no margins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dock layout with content margins.
    pub fn with_margins(margins: ContentMargins) -> Self {
        Self { margins }
    }

    /// Arrange children inside `bounds`.
    ///
    /// `items` is `(dock, extent)` per child in dock order, where `extent`
    /// is the child's height for `Top`/`Bottom` docking and ignored for
    /// `Fill`/`None`. Returns one rectangle per item; `None` items get an
    /// empty rect at the origin. The remaining area never goes negative:
    /// over-committed extents collapse to zero-height slices.
    pub fn arrange(&self, bounds: Rect, items: &[(Dock, f32)]) -> Vec<Rect> {
        let mut remaining = Rect::new(
            bounds.left() + self.margins.left,
            bounds.top() + self.margins.top,
            (bounds.width() - self.margins.horizontal()).max(0.0),
            (bounds.height() - self.margins.vertical()).max(0.0),
        );

        items
            .iter()
            .map(|&(dock, extent)| match dock {
                Dock::None => Rect::ZERO,
                Dock::Top => {
                    let height = extent.clamp(0.0, remaining.height());
                    let rect =
                        Rect::new(remaining.left(), remaining.top(), remaining.width(), height);
                    remaining = Rect::new(
                        remaining.left(),
                        remaining.top() + height,
                        remaining.width(),
                        remaining.height() - height,
                    );
                    rect
                }
                Dock::Bottom => {
                    let height = extent.clamp(0.0, remaining.height());
                    let rect = Rect::new(
                        remaining.left(),
                        remaining.bottom() - height,
                        remaining.width(),
                        height,
                    );
                    remaining = Rect::new(
                        remaining.left(),
                        remaining.top(),
                        remaining.width(),
                        remaining.height() - height,
                    );
                    rect
                }
                Dock::Fill => remaining,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_then_fill() {
        // The collapsed dialog arrangement: buttons bottom, viewer fill.
        let layout = DockLayout::new();
        let rects = layout.arrange(
            Rect::new(0.0, 0.0, 400.0, 300.0),
            &[(Dock::Bottom, 37.0), (Dock::Fill, 0.0)],
        );

        assert_eq!(rects[0], Rect::new(0.0, 263.0, 400.0, 37.0));
        assert_eq!(rects[1], Rect::new(0.0, 0.0, 400.0, 263.0));
    }

    #[test]
    fn test_top_top_fill() {
        // The expanded arrangement: viewer top, buttons top, attach fill.
        let layout = DockLayout::new();
        let rects = layout.arrange(
            Rect::new(0.0, 0.0, 400.0, 450.0),
            &[(Dock::Top, 100.0), (Dock::Top, 37.0), (Dock::Fill, 0.0)],
        );

        assert_eq!(rects[0], Rect::new(0.0, 0.0, 400.0, 100.0));
        assert_eq!(rects[1], Rect::new(0.0, 100.0, 400.0, 37.0));
        assert_eq!(rects[2], Rect::new(0.0, 137.0, 400.0, 313.0));
    }

    #[test]
    fn test_margins_reserved() {
        let layout = DockLayout::with_margins(ContentMargins::new(0.0, 0.0, 0.0, 17.0));
        let rects = layout.arrange(
            Rect::new(0.0, 0.0, 400.0, 300.0),
            &[(Dock::Bottom, 37.0), (Dock::Fill, 0.0)],
        );

        // The bottom margin stays free below the buttons.
        assert_eq!(rects[0].bottom(), 283.0);
        assert_eq!(rects[1].height(), 246.0);
    }

    #[test]
    fn test_stable_across_resizes() {
        let layout = DockLayout::new();
        let items = [(Dock::Bottom, 37.0), (Dock::Fill, 0.0)];

        // Growing then shrinking the container restores the exact layout.
        let before = layout.arrange(Rect::new(0.0, 0.0, 400.0, 300.0), &items);
        let _grown = layout.arrange(Rect::new(0.0, 0.0, 400.0, 500.0), &items);
        let after = layout.arrange(Rect::new(0.0, 0.0, 400.0, 300.0), &items);
        assert_eq!(before, after);
    }

    #[test]
    fn test_overcommitted_extents_collapse() {
        let layout = DockLayout::new();
        let rects = layout.arrange(
            Rect::new(0.0, 0.0, 100.0, 50.0),
            &[(Dock::Top, 40.0), (Dock::Top, 40.0), (Dock::Fill, 0.0)],
        );

        assert_eq!(rects[0].height(), 40.0);
        assert_eq!(rects[1].height(), 10.0);
        assert_eq!(rects[2].height(), 0.0);
    }
}
