//! Stepped resize animation.
//!
//! Expanding or collapsing the details region changes the window height by
//! a signed delta. When animation is enabled the change is played as a
//! fixed number of frames on a fixed cadence: seven intermediate heights of
//! `delta / 8` each, then a final frame that lands on the exact target so
//! rounding can never accumulate into drift.
//!
//! The animation is a cooperative-step state machine: it holds no timer of
//! its own. The host event loop (or a test) pulls one frame at a time via
//! [`ResizeAnimation::next_height`] on the [`ResizeAnimation::FRAME_INTERVAL`]
//! cadence, applying each height as it arrives. There is no cancellation;
//! a started animation is always stepped to completion.

use std::time::Duration;

/// A fixed-frame window-height animation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeAnimation {
    start: f32,
    target: f32,
    frame: u32,
}

impl ResizeAnimation {
    /// Total number of frames per animation.
    pub const FRAMES: u32 = 8;

    /// The pause between frames.
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(10);

    /// Create an animation from the current height over a signed delta.
    pub fn new(current: f32, delta: f32) -> Self {
        Self {
            start: current,
            target: current + delta,
            frame: 0,
        }
    }

    /// The exact height the animation lands on.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether all frames have been emitted.
    pub fn is_finished(&self) -> bool {
        self.frame >= Self::FRAMES
    }

    /// Emit the next height, or `None` when the animation has finished.
    ///
    /// The final frame is always exactly the target height.
    pub fn next_height(&mut self) -> Option<f32> {
        if self.is_finished() {
            return None;
        }
        self.frame += 1;
        if self.frame == Self::FRAMES {
            Some(self.target)
        } else {
            let per_frame = (self.target - self.start) / Self::FRAMES as f32;
            Some(self.start + per_frame * self.frame as f32)
        }
    }
}

impl Iterator for ResizeAnimation {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.next_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_exactly_eight_frames() {
        let animation = ResizeAnimation::new(300.0, 150.0);
        assert_eq!(animation.count(), ResizeAnimation::FRAMES as usize);
    }

    #[test]
    fn test_final_frame_is_exact_target() {
        let heights: Vec<f32> = ResizeAnimation::new(300.0, 151.0).collect();
        assert_eq!(*heights.last().unwrap(), 451.0);
    }

    #[test]
    fn test_growth_is_monotonic() {
        let heights: Vec<f32> = ResizeAnimation::new(300.0, 150.0).collect();
        for pair in heights.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert!(heights[0] > 300.0);
    }

    #[test]
    fn test_shrink_is_monotonic() {
        let heights: Vec<f32> = ResizeAnimation::new(450.0, -150.0).collect();
        for pair in heights.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert_eq!(*heights.last().unwrap(), 300.0);
    }

    #[test]
    fn test_finished_state() {
        let mut animation = ResizeAnimation::new(100.0, 80.0);
        assert!(!animation.is_finished());
        while animation.next_height().is_some() {}
        assert!(animation.is_finished());
        assert_eq!(animation.next_height(), None);
    }

    #[test]
    fn test_zero_delta_still_lands_on_target() {
        let heights: Vec<f32> = ResizeAnimation::new(200.0, 0.0).collect();
        assert_eq!(heights.len(), ResizeAnimation::FRAMES as usize);
        assert!(heights.iter().all(|&h| h == 200.0));
    }
}
