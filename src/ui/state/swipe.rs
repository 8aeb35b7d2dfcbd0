// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state.
//!
//! Tracks a press-drag-release over the image pane and reports a navigation
//! direction when the horizontal displacement exceeds the threshold.

use crate::config::SWIPE_THRESHOLD;
use iced::Point;

/// Direction a completed swipe navigates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward swipe: advance to the next image.
    Next,
    /// Rightward swipe: go back to the previous image.
    Previous,
}

/// Manages swipe gesture state.
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    /// Position where the press started, while a gesture is in progress.
    start: Option<Point>,
}

impl SwipeState {
    /// Starts a gesture at `position`.
    pub fn begin(&mut self, position: Point) {
        self.start = Some(position);
    }

    /// Abandons the gesture in progress.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the gesture at `position`. Returns the navigation direction when
    /// the horizontal displacement exceeds the threshold, `None` for taps
    /// and short drags. Only the horizontal component counts.
    #[must_use]
    pub fn finish(&mut self, position: Point) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        let dx = position.x - start.x;
        if dx.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        Some(if dx < 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Previous
        })
    }
}
