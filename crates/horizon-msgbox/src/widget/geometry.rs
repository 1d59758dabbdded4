//! Size hints and size policies for widget layout.
//!
//! Layout negotiation between widgets and their containers: a widget
//! reports a [`SizeHint`] (preferred plus optional bounds) and a
//! [`SizePolicyPair`] describing how it may deviate from it.

use horizon_msgbox_render::Size;

/// How a widget behaves when space is allocated to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// The widget cannot grow or shrink; it stays at its size hint.
    Fixed,

    /// The size hint is the minimum; the widget can grow.
    Minimum,

    /// The size hint is the maximum; the widget can shrink.
    Maximum,

    /// The size hint is preferred but the widget can grow and shrink.
    #[default]
    Preferred,

    /// The widget wants as much space as possible.
    Expanding,
}

impl SizePolicy {
    /// Whether the policy allows the widget to grow.
    #[inline]
    pub fn can_grow(self) -> bool {
        !matches!(self, Self::Fixed | Self::Maximum)
    }

    /// Whether the policy allows the widget to shrink.
    #[inline]
    pub fn can_shrink(self) -> bool {
        !matches!(self, Self::Fixed | Self::Minimum)
    }
}

/// Combined horizontal and vertical size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    /// Horizontal size policy.
    pub horizontal: SizePolicy,
    /// Vertical size policy.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a new size policy pair.
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// The same policy in both dimensions.
    pub fn uniform(policy: SizePolicy) -> Self {
        Self::new(policy, policy)
    }

    /// A fixed size policy (widget cannot resize).
    pub fn fixed() -> Self {
        Self::uniform(SizePolicy::Fixed)
    }

    /// An expanding size policy (widget wants more space).
    pub fn expanding() -> Self {
        Self::uniform(SizePolicy::Expanding)
    }
}

/// Preferred, minimum and maximum sizes for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The preferred size for the widget to display optimally.
    pub preferred: Size,

    /// The minimum acceptable size. `None` means no minimum constraint.
    pub minimum: Option<Size>,

    /// The maximum size. `None` means no maximum constraint.
    pub maximum: Option<Size>,
}

impl SizeHint {
    /// Create a size hint with the specified preferred size.
    pub fn new(preferred: Size) -> Self {
        Self {
            preferred,
            minimum: None,
            maximum: None,
        }
    }

    /// Create a size hint with explicit width and height.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self::new(Size::new(width, height))
    }

    /// Create a fixed size hint (preferred = minimum = maximum).
    pub fn fixed(size: Size) -> Self {
        Self {
            preferred: size,
            minimum: Some(size),
            maximum: Some(size),
        }
    }

    /// Set the minimum size.
    pub fn with_minimum(mut self, minimum: Size) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Set the maximum size.
    pub fn with_maximum(mut self, maximum: Size) -> Self {
        self.maximum = Some(maximum);
        self
    }

    /// Set minimum dimensions.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Some(Size::new(width, height));
        self
    }

    /// Get the effective minimum size (zero if not set).
    pub fn effective_minimum(&self) -> Size {
        self.minimum.unwrap_or(Size::ZERO)
    }

    /// Constrain a size to the minimum and maximum bounds.
    pub fn constrain(&self, size: Size) -> Size {
        let min = self.effective_minimum();
        let max = self.maximum.unwrap_or(Size::new(f32::MAX, f32::MAX));
        Size::new(
            size.width.clamp(min.width, max.width),
            size.height.clamp(min.height, max.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_policy_grow_shrink() {
        assert!(!SizePolicy::Fixed.can_grow());
        assert!(!SizePolicy::Fixed.can_shrink());
        assert!(SizePolicy::Minimum.can_grow());
        assert!(!SizePolicy::Minimum.can_shrink());
        assert!(SizePolicy::Expanding.can_grow());
        assert!(SizePolicy::Preferred.can_shrink());
    }

    #[test]
    fn test_size_hint_constrain() {
        let hint = SizeHint::new(Size::new(100.0, 100.0))
            .with_minimum(Size::new(50.0, 50.0))
            .with_maximum(Size::new(200.0, 200.0));

        assert_eq!(
            hint.constrain(Size::new(150.0, 150.0)),
            Size::new(150.0, 150.0)
        );
        assert_eq!(hint.constrain(Size::new(25.0, 25.0)), Size::new(50.0, 50.0));
        assert_eq!(
            hint.constrain(Size::new(300.0, 300.0)),
            Size::new(200.0, 200.0)
        );
    }

    #[test]
    fn test_size_hint_fixed() {
        let hint = SizeHint::fixed(Size::new(93.0, 27.0));
        assert_eq!(hint.minimum, Some(Size::new(93.0, 27.0)));
        assert_eq!(hint.maximum, Some(Size::new(93.0, 27.0)));
    }
}
