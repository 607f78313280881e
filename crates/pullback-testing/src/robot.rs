//! Robot-style driver for pull gestures.
//!
//! [`GestureRobot`] owns a controller wired to a [`FakeHost`] and a
//! [`RecordingCallback`], and synthesizes timed pointer sequences against it.
//! Frames are only delivered when the controller asked for one, the same
//! contract a real host honours.
//!
//! # Example
//!
//! ```
//! use pullback_testing::{GestureRobot, PullEvent};
//! use pullback_foundation::PullDirection;
//!
//! let mut robot = GestureRobot::new(600);
//! robot.pull(400.0, 200);
//!
//! assert_eq!(
//!     robot.recorder().last(),
//!     Some(PullEvent::Complete(PullDirection::Down))
//! );
//! ```

use std::rc::Rc;

use pullback_foundation::{
    ConfigError, DragHelper, GestureController, Point, PointerEvent, PointerId, PullBackConfig,
    ViewDragTracker,
};

use crate::recording::{FakeHost, RecordingCallback};

/// Duration of one synthesized frame (~60 FPS).
pub const FRAME_NANOS: u64 = 16_666_667;

/// Upper bound on frames pumped by [`GestureRobot::settle`].
const MAX_SETTLE_FRAMES: usize = 1_000;

/// Interval between synthesized move events.
const MOVE_INTERVAL_MS: i64 = 8;

pub struct GestureRobot<D: DragHelper = ViewDragTracker> {
    controller: GestureController<D>,
    host: Rc<FakeHost>,
    recorder: Rc<RecordingCallback>,
    pointer: PointerId,
    x: f32,
    y: f32,
    uptime_ms: i64,
    frame_time_nanos: u64,
}

impl GestureRobot<ViewDragTracker> {
    /// Robot over a default controller for a view `height` pixels tall.
    pub fn new(height: i32) -> Self {
        let host = Rc::new(FakeHost::new(height));
        let controller = GestureController::new(ViewDragTracker::new(), host.clone());
        Self::assemble(host, controller)
    }

    pub fn with_config(height: i32, config: PullBackConfig) -> Result<Self, ConfigError> {
        Self::with_helper(height, config, ViewDragTracker::new())
    }
}

impl<D: DragHelper> GestureRobot<D> {
    pub fn with_helper(height: i32, config: PullBackConfig, helper: D) -> Result<Self, ConfigError> {
        let host = Rc::new(FakeHost::new(height));
        let controller = GestureController::with_config(config, helper, host.clone())?;
        Ok(Self::assemble(host, controller))
    }

    fn assemble(host: Rc<FakeHost>, mut controller: GestureController<D>) -> Self {
        let recorder = Rc::new(RecordingCallback::new());
        controller.set_callback(Some(recorder.clone()));
        Self {
            controller,
            host,
            recorder,
            pointer: 0,
            x: 0.0,
            y: 0.0,
            uptime_ms: 0,
            frame_time_nanos: 0,
        }
    }

    pub fn controller(&self) -> &GestureController<D> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut GestureController<D> {
        &mut self.controller
    }

    pub fn host(&self) -> &FakeHost {
        &self.host
    }

    pub fn recorder(&self) -> &RecordingCallback {
        &self.recorder
    }

    /// Current synthesized pointer position.
    pub fn pointer_y(&self) -> f32 {
        self.y
    }

    pub fn uptime_ms(&self) -> i64 {
        self.uptime_ms
    }

    /// Puts a new pointer down at `y`. Each press uses a fresh pointer id.
    pub fn press(&mut self, y: f32) -> bool {
        self.pointer += 1;
        self.y = y;
        let event = PointerEvent::down(self.pointer, self.position(), self.uptime_ms);
        self.controller.on_pointer_event(&event)
    }

    /// Moves the pointer to `y`, `after_ms` after the previous event.
    pub fn move_to(&mut self, y: f32, after_ms: i64) -> bool {
        self.uptime_ms += after_ms;
        self.y = y;
        let event = PointerEvent::moved(self.pointer, self.position(), self.uptime_ms);
        self.controller.on_pointer_event(&event)
    }

    /// Moves the pointer by `dy` over `duration_ms` in evenly spaced steps.
    pub fn drag_by(&mut self, dy: f32, duration_ms: i64) {
        let steps = (duration_ms / MOVE_INTERVAL_MS).max(1);
        let interval = duration_ms / steps;
        let from = self.y;
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.move_to(from + dy * t, interval);
        }
    }

    /// Lifts the pointer; the controller estimates release velocity itself.
    pub fn release(&mut self) -> bool {
        let event = PointerEvent::up(self.pointer, self.position(), self.uptime_ms);
        self.controller.on_pointer_event(&event)
    }

    /// Lifts the pointer reporting a platform-resolved velocity.
    pub fn release_with_velocity(&mut self, velocity_y: f32) -> bool {
        let event = PointerEvent::up(self.pointer, self.position(), self.uptime_ms)
            .with_velocity(velocity_y);
        self.controller.on_pointer_event(&event)
    }

    /// The host took the pointer away (e.g. a parent intercepted it).
    pub fn cancel_pointer(&mut self) -> bool {
        let event = PointerEvent::cancel(self.pointer, self.position(), self.uptime_ms);
        self.controller.on_pointer_event(&event)
    }

    /// Presses at the top of the view, drags by `dy` over `duration_ms` and
    /// holds still for a moment before releasing, so the release carries no
    /// fling velocity.
    pub fn pull(&mut self, dy: f32, duration_ms: i64) {
        self.press(0.0);
        self.drag_by(dy, duration_ms);
        self.uptime_ms += 100;
        self.release();
    }

    /// Like [`pull`](Self::pull) but releases mid-motion.
    pub fn fling(&mut self, dy: f32, duration_ms: i64) {
        self.press(0.0);
        self.drag_by(dy, duration_ms);
        self.release();
    }

    /// Delivers one frame if the controller requested one. Returns whether
    /// a frame was delivered.
    pub fn advance_frame(&mut self) -> bool {
        if !self.host.take_frame_request() {
            return false;
        }
        self.frame_time_nanos += FRAME_NANOS;
        self.controller.on_animation_frame(self.frame_time_nanos);
        true
    }

    /// Pumps frames until the controller stops asking. Returns the number
    /// of frames delivered.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.advance_frame() {
            frames += 1;
            if frames >= MAX_SETTLE_FRAMES {
                log::warn!("settle still running after {frames} frames");
                break;
            }
        }
        frames
    }

    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
