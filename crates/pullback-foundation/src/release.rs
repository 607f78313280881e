//! Release-time decision: did the user mean to dismiss?
//!
//! A release completes the pull when the view travelled further than the
//! release slop. The slop is a third of the view's extent for a slow drag and
//! a sixth for a fling, so a decisive flick needs less travel than a drag.

use crate::axis::{DragAxis, PullDirection};
use crate::gesture_constants::{DRAG_SLOP_DIVISOR, FLING_SLOP_DIVISOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseOutcome {
    /// The pull crossed the slop; the host should dismiss.
    Complete,
    /// The pull fell short; the view settles back to rest.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseDecision {
    pub direction: PullDirection,
    pub outcome: ReleaseOutcome,
}

impl ReleaseDecision {
    pub fn is_complete(&self) -> bool {
        self.outcome == ReleaseOutcome::Complete
    }
}

/// Whether `velocity_y` is fast enough to count as a fling.
pub fn is_fling(velocity_y: f32, min_fling_velocity: f32) -> bool {
    velocity_y.abs() > min_fling_velocity
}

/// Minimum travel for a release to complete the pull.
pub fn release_slop(extent: i32, velocity_y: f32, min_fling_velocity: f32) -> i32 {
    if is_fling(velocity_y, min_fling_velocity) {
        extent / FLING_SLOP_DIVISOR
    } else {
        extent / DRAG_SLOP_DIVISOR
    }
}

/// Decides what a release at `offset` means.
///
/// Returns `None` when the view is at rest: there is nothing to resolve. The
/// rule is evaluated per sign, `offset > slop` downwards and `offset < -slop`
/// upwards. An offset in a direction `axis` no longer allows always cancels,
/// which happens when the axis is reconfigured after the last move.
pub fn resolve(
    offset: i32,
    extent: i32,
    velocity_y: f32,
    min_fling_velocity: f32,
    axis: DragAxis,
) -> Option<ReleaseDecision> {
    debug_assert!(extent >= 0, "view extent must not be negative: {extent}");

    let direction = PullDirection::of_offset(offset)?;
    let slop = release_slop(extent, velocity_y, min_fling_velocity);

    let crossed = match direction {
        PullDirection::Down => offset > slop,
        PullDirection::Up => offset < -slop,
    };
    let outcome = if crossed && axis.allows(direction) {
        ReleaseOutcome::Complete
    } else {
        ReleaseOutcome::Cancel
    };

    Some(ReleaseDecision { direction, outcome })
}

#[cfg(test)]
#[path = "tests/release_tests.rs"]
mod tests;
