//! Single-pointer horizontal drag tracking.

use crate::labels::Side;

/// Default horizontal travel, in pixels, a drag must exceed to commit.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum GestureState {
    Idle,
    Dragging { start_x: f32, current_x: f32, origin: u64 },
}

/// Final displacement of a finished drag.
///
/// `origin` is the opaque tag supplied to [`GestureTracker::start`]; callers use
/// it to detect that their own state moved on while the drag was open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub dx: f32,
    pub origin: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureTracker {
    state: GestureState,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub const fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    /// Begins tracking at `x`. A start while already dragging restarts the origin.
    pub fn start(&mut self, x: f32, origin: u64) {
        self.state = GestureState::Dragging {
            start_x: x,
            current_x: x,
            origin,
        };
    }

    /// Moves the tracked pointer. Ignored when idle.
    pub fn update(&mut self, x: f32) {
        if let GestureState::Dragging { current_x, .. } = &mut self.state {
            *current_x = x;
        }
    }

    /// Ends the drag and returns to idle, whatever the outcome.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn release(&mut self) -> Option<Release> {
        let GestureState::Dragging {
            start_x,
            current_x,
            origin,
        } = core::mem::replace(&mut self.state, GestureState::Idle)
        else {
            return None;
        };

        Some(Release {
            dx: current_x - start_x,
            origin,
        })
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Live displacement of the open drag, `None` when idle or when the
    /// reported positions do not give a finite distance.
    pub fn dx(&self) -> Option<f32> {
        match self.state {
            GestureState::Dragging {
                start_x, current_x, ..
            } => Some(current_x - start_x).filter(|dx| dx.is_finite()),
            GestureState::Idle => None,
        }
    }
}

/// Maps a released drag to a category.
///
/// The comparison is strict: a drag of exactly `threshold` is discarded, and a
/// non-finite `dx` never commits.
pub fn swipe_decision(dx: f32, threshold: f32) -> Option<Side> {
    if !dx.is_finite() {
        None
    } else if dx < -threshold {
        Some(Side::Left)
    } else if dx > threshold {
        Some(Side::Right)
    } else {
        None
    }
}
