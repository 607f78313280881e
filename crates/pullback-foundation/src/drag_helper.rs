//! The drag mechanism the controller steers.
//!
//! [`DragHelper`] isolates the platform-specific capture/track/settle
//! primitive. The controller decides *where* the view may go; the helper
//! moves it there and animates it home after a cancelled pull.

use crate::input::PointerId;
use pullback_animation::{SettleAnimation, SettleSpec};

/// Capture/track/settle primitive for a single vertically dragged view.
///
/// Offsets are view tops relative to rest: 0 at rest, positive below.
pub trait DragHelper {
    /// Starts tracking `pointer`. The view may travel at most `drag_range`
    /// pixels from rest in either direction until the next call.
    fn begin_track(&mut self, pointer: PointerId, drag_range: i32);

    /// Moves the view to `top`, bounded by the drag range, and returns where
    /// it actually ended up.
    fn clamp_and_report(&mut self, top: i32) -> i32;

    /// Starts animating the view to `target`. Returns `false` when no motion
    /// is needed because the view is already there.
    fn request_settle(&mut self, target: i32) -> bool;

    /// Advances the settle motion to `frame_time_nanos`. Returns whether the
    /// view is still settling.
    fn step_settle(&mut self, frame_time_nanos: u64) -> bool;

    /// Current view top.
    fn current_top(&self) -> i32;

    /// Stops tracking and any settle in progress, leaving the view at the
    /// settle target (or where it is, if it was not settling).
    fn abort(&mut self);
}

/// Default [`DragHelper`] keeping the view top in memory and settling it with
/// a frame-stepped tween.
#[derive(Debug, Clone, Default)]
pub struct ViewDragTracker {
    top: i32,
    pointer: Option<PointerId>,
    drag_range: i32,
    settle: Option<SettleAnimation>,
}

impl ViewDragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer currently being tracked, if any.
    pub fn tracked_pointer(&self) -> Option<PointerId> {
        self.pointer
    }

    pub fn drag_range(&self) -> i32 {
        self.drag_range
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Moves the view without animating, e.g. when the host restores layout.
    pub fn snap_to(&mut self, top: i32) {
        self.settle = None;
        self.top = top;
    }
}

impl DragHelper for ViewDragTracker {
    fn begin_track(&mut self, pointer: PointerId, drag_range: i32) {
        debug_assert!(drag_range >= 0, "drag range must not be negative");
        self.settle = None;
        self.pointer = Some(pointer);
        self.drag_range = drag_range.max(0);
    }

    fn clamp_and_report(&mut self, top: i32) -> i32 {
        self.top = top.clamp(-self.drag_range, self.drag_range);
        self.top
    }

    fn request_settle(&mut self, target: i32) -> bool {
        self.pointer = None;
        if self.top == target {
            self.settle = None;
            return false;
        }
        let distance = (target - self.top) as f32;
        let spec = SettleSpec::for_distance(distance, self.drag_range as f32);
        log::trace!(
            "settling {} -> {} over {}ms",
            self.top,
            target,
            spec.duration_millis
        );
        self.settle = Some(SettleAnimation::new(self.top as f32, target as f32, spec));
        true
    }

    fn step_settle(&mut self, frame_time_nanos: u64) -> bool {
        let Some(settle) = self.settle.as_mut() else {
            return false;
        };
        let frame = settle.step(frame_time_nanos);
        self.top = frame.value.round() as i32;
        if frame.finished {
            self.settle = None;
        }
        !frame.finished
    }

    fn current_top(&self) -> i32 {
        self.top
    }

    fn abort(&mut self) {
        if let Some(settle) = self.settle.take() {
            self.top = settle.target().round() as i32;
        }
        self.pointer = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_NANOS: u64 = 16_666_667;

    #[test]
    fn tracking_is_bounded_by_drag_range() {
        let mut tracker = ViewDragTracker::new();
        tracker.begin_track(7, 600);

        assert_eq!(tracker.tracked_pointer(), Some(7));
        assert_eq!(tracker.clamp_and_report(250), 250);
        assert_eq!(tracker.clamp_and_report(900), 600);
        assert_eq!(tracker.clamp_and_report(-900), -600);
        assert_eq!(tracker.current_top(), -600);
    }

    #[test]
    fn zero_range_pins_the_view() {
        let mut tracker = ViewDragTracker::new();
        tracker.begin_track(1, 0);
        assert_eq!(tracker.clamp_and_report(120), 0);
    }

    #[test]
    fn settle_animates_back_to_target() {
        let mut tracker = ViewDragTracker::new();
        tracker.begin_track(1, 1200);
        tracker.clamp_and_report(150);

        assert!(tracker.request_settle(0));
        assert!(tracker.is_settling());
        assert_eq!(tracker.tracked_pointer(), None);

        let mut time = 0;
        let mut frames = 0;
        while tracker.step_settle(time) {
            let top = tracker.current_top();
            assert!((0..=150).contains(&top), "top out of range: {top}");
            time += FRAME_NANOS;
            frames += 1;
            assert!(frames < 100, "settle never finished");
        }

        assert_eq!(tracker.current_top(), 0);
        assert!(!tracker.is_settling());
        assert!(!tracker.step_settle(time + FRAME_NANOS));
    }

    #[test]
    fn settle_at_target_is_a_no_op() {
        let mut tracker = ViewDragTracker::new();
        tracker.begin_track(1, 600);
        assert!(!tracker.request_settle(0));
        assert!(!tracker.step_settle(0));
    }

    #[test]
    fn abort_jumps_to_settle_target() {
        let mut tracker = ViewDragTracker::new();
        tracker.begin_track(1, 600);
        tracker.clamp_and_report(-300);
        tracker.request_settle(0);
        tracker.step_settle(0);

        tracker.abort();

        assert_eq!(tracker.current_top(), 0);
        assert!(!tracker.is_settling());
    }

    #[test]
    fn begin_track_interrupts_settle() {
        let mut tracker = ViewDragTracker::new();
        tracker.begin_track(1, 600);
        tracker.clamp_and_report(200);
        tracker.request_settle(0);

        tracker.begin_track(2, 600);

        assert!(!tracker.is_settling());
        assert_eq!(tracker.current_top(), 200);
    }
}
