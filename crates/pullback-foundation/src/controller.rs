//! Pull gesture state machine.
//!
//! ```text
//! Idle --capture--> Dragging --release:Complete--> Idle
//! Dragging --release:Cancel--> Settling --settle-finished--> Idle
//! ```
//!
//! The controller claims every pointer that goes down while it is idle,
//! tracks that single pointer, reports progress while the view moves and
//! resolves the release. A cancelled pull settles back to rest over however
//! many animation frames the drag helper needs.

use std::fmt;
use std::rc::Rc;

use crate::axis::{DragAxis, PullDirection};
use crate::config::{ConfigError, PullBackConfig};
use crate::drag_helper::{DragHelper, ViewDragTracker};
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use crate::release::{self, ReleaseDecision, ReleaseOutcome};
use crate::velocity_tracker::VelocityTracker1D;

/// Receiver of pull notifications.
///
/// For one gesture the calls arrive as `on_pull_start`, any number of
/// `on_pull`, then at most one of `on_pull_cancel`/`on_pull_complete`.
pub trait PullCallback {
    fn on_pull_start(&self);

    /// `progress` is the pulled distance as a fraction of the view height,
    /// in [0, 1].
    fn on_pull(&self, direction: PullDirection, progress: f32);

    fn on_pull_cancel(&self, direction: PullDirection);

    fn on_pull_complete(&self, direction: PullDirection);
}

/// What the controller needs from the view hierarchy hosting it.
pub trait HostView {
    /// Height of the dragged view in pixels. Sampled once per gesture.
    fn height(&self) -> i32;

    /// Schedule a call to [`GestureController::on_animation_frame`] on the
    /// next frame.
    fn request_frame(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

/// Bookkeeping for the pointer being tracked.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    pointer: PointerId,
    down_y: f32,
    /// View top when the pointer went down.
    start_top: i32,
    last_offset: i32,
}

/// Converts a clamped offset into pull progress for a view of height `extent`.
pub fn pull_progress(offset: i32, extent: i32) -> f32 {
    debug_assert!(extent >= 0, "view extent must not be negative: {extent}");
    if extent <= 0 {
        return 0.0;
    }
    (offset.unsigned_abs() as f32 / extent as f32).min(1.0)
}

pub struct GestureController<D: DragHelper = ViewDragTracker> {
    config: PullBackConfig,
    helper: D,
    host: Rc<dyn HostView>,
    callback: Option<Rc<dyn PullCallback>>,
    state: GestureState,
    drag: Option<ActiveDrag>,
    /// View height captured at gesture start.
    extent: i32,
    velocity: VelocityTracker1D,
}

impl<D: DragHelper> GestureController<D> {
    /// Creates a controller with the default configuration.
    pub fn new(helper: D, host: Rc<dyn HostView>) -> Self {
        Self {
            config: PullBackConfig::default(),
            helper,
            host,
            callback: None,
            state: GestureState::Idle,
            drag: None,
            extent: 0,
            velocity: VelocityTracker1D::new(),
        }
    }

    pub fn with_config(
        config: PullBackConfig,
        helper: D,
        host: Rc<dyn HostView>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut controller = Self::new(helper, host);
        controller.config = config;
        Ok(controller)
    }

    pub fn config(&self) -> PullBackConfig {
        self.config
    }

    /// Replaces the whole configuration. Takes effect from the next event.
    pub fn set_config(&mut self, config: PullBackConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let axis_changed = config.axis != self.config.axis;
        self.config = config;
        if axis_changed {
            self.rearm_drag_range();
        }
        Ok(())
    }

    pub fn axis(&self) -> DragAxis {
        self.config.axis
    }

    /// Sets the allowed pull directions.
    ///
    /// Already emitted progress is untouched; the next move is clamped with
    /// the new axis and the release is resolved against it.
    pub fn set_axis(&mut self, axis: DragAxis) {
        if axis == self.config.axis {
            return;
        }
        log::debug!("axis {:?} -> {:?}", self.config.axis, axis);
        self.config.axis = axis;
        self.rearm_drag_range();
    }

    /// Replaces the notification sink. `None` silences notifications without
    /// touching gesture state.
    pub fn set_callback(&mut self, callback: Option<Rc<dyn PullCallback>>) {
        self.callback = callback;
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_settling(&self) -> bool {
        self.state == GestureState::Settling
    }

    /// Offset of the view from rest while a gesture is in progress.
    pub fn offset(&self) -> Option<i32> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging | GestureState::Settling => Some(self.helper.current_top()),
        }
    }

    /// View height captured when the current gesture started.
    pub fn view_extent(&self) -> Option<i32> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Dragging | GestureState::Settling => Some(self.extent),
        }
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.drag.map(|drag| drag.pointer)
    }

    /// Vertical travel the drag mechanism allows for the current axis: the
    /// captured extent during a gesture, the host's current height otherwise.
    pub fn drag_range(&self) -> i32 {
        let extent = match self.state {
            GestureState::Idle => self.host.height(),
            GestureState::Dragging | GestureState::Settling => self.extent,
        };
        self.config.axis.drag_range(extent)
    }

    pub fn helper(&self) -> &D {
        &self.helper
    }

    pub fn helper_mut(&mut self) -> &mut D {
        &mut self.helper
    }

    /// Feeds one raw pointer record. Returns whether the controller claimed
    /// it; unclaimed events may be forwarded elsewhere by the host.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up | PointerEventKind::Cancel => self.on_release(event),
        }
    }

    /// Animation frame notification. Returns whether another frame was
    /// requested.
    pub fn on_animation_frame(&mut self, frame_time_nanos: u64) -> bool {
        if self.state != GestureState::Settling {
            return false;
        }
        if self.helper.step_settle(frame_time_nanos) {
            self.host.request_frame();
            true
        } else {
            log::debug!("settle finished at top {}", self.helper.current_top());
            self.state = GestureState::Idle;
            false
        }
    }

    /// Abandons whatever gesture is in progress and returns to `Idle` with
    /// the view at rest, e.g. when the view is detached.
    ///
    /// A drag that had moved the view is reported as cancelled first.
    pub fn reset(&mut self) {
        if self.state == GestureState::Dragging {
            if let Some(direction) = PullDirection::of_offset(self.helper.current_top()) {
                self.notify(|callback| callback.on_pull_cancel(direction));
            }
            self.helper.request_settle(0);
        }
        self.helper.abort();
        if self.state != GestureState::Idle {
            log::debug!("reset from {:?}", self.state);
        }
        self.drag = None;
        self.velocity.clear();
        self.state = GestureState::Idle;
    }

    fn on_down(&mut self, event: &PointerEvent) -> bool {
        if self.state != GestureState::Idle {
            log::trace!(
                "ignoring down of pointer {} while {:?}",
                event.id,
                self.state
            );
            return false;
        }

        let extent = self.host.height();
        debug_assert!(extent >= 0, "view extent must not be negative: {extent}");
        let range = self.config.axis.drag_range(extent);
        let start_top = self.helper.current_top();
        self.helper.begin_track(event.id, range);

        self.velocity.clear();
        self.velocity.add_sample(event.uptime_ms, event.position.y);
        self.extent = extent;
        self.drag = Some(ActiveDrag {
            pointer: event.id,
            down_y: event.position.y,
            start_top,
            last_offset: start_top,
        });
        self.state = GestureState::Dragging;

        log::debug!(
            "captured pointer {} (extent {}, range {}, axis {:?})",
            event.id,
            extent,
            range,
            self.config.axis
        );
        self.notify(|callback| callback.on_pull_start());
        true
    }

    fn on_move(&mut self, event: &PointerEvent) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        if drag.pointer != event.id {
            return false;
        }

        self.velocity.add_sample(event.uptime_ms, event.position.y);

        // The float cast saturates; keep the sum from wrapping past it.
        let raw_top = drag
            .start_top
            .saturating_add((event.position.y - drag.down_y).round() as i32);
        let clamped = self.config.axis.clamp(raw_top);
        let offset = self.helper.clamp_and_report(clamped);
        if offset == drag.last_offset {
            return true;
        }
        drag.last_offset = offset;

        log::trace!("pointer {} raw {} -> offset {}", event.id, raw_top, offset);
        self.emit_progress(offset);
        true
    }

    fn on_release(&mut self, event: &PointerEvent) -> bool {
        match self.drag {
            Some(drag) if drag.pointer == event.id => {}
            _ => return false,
        }
        self.drag = None;

        let velocity_y = match event.kind {
            PointerEventKind::Cancel => 0.0,
            _ => {
                self.velocity.add_sample(event.uptime_ms, event.position.y);
                event.velocity_y().unwrap_or_else(|| {
                    self.velocity
                        .velocity_capped(self.config.max_fling_velocity)
                })
            }
        };
        self.velocity.clear();

        let offset = self.helper.current_top();
        let decision = release::resolve(
            offset,
            self.extent,
            velocity_y,
            self.config.min_fling_velocity,
            self.config.axis,
        );
        log::debug!(
            "released pointer {} at offset {} with velocity {:.1}: {:?}",
            event.id,
            offset,
            velocity_y,
            decision
        );

        match decision {
            None => {
                self.state = GestureState::Idle;
            }
            Some(ReleaseDecision {
                direction,
                outcome: ReleaseOutcome::Complete,
            }) => {
                self.state = GestureState::Idle;
                self.notify(|callback| callback.on_pull_complete(direction));
            }
            Some(ReleaseDecision {
                direction,
                outcome: ReleaseOutcome::Cancel,
            }) => {
                self.state = GestureState::Settling;
                self.notify(|callback| callback.on_pull_cancel(direction));
                self.helper.request_settle(0);
                // The first settle frame has to be asked for explicitly.
                self.host.request_frame();
            }
        }
        true
    }

    fn emit_progress(&self, offset: i32) {
        let Some(direction) = PullDirection::of_offset(offset) else {
            return;
        };
        let progress = pull_progress(offset, self.extent);
        self.notify(|callback| callback.on_pull(direction, progress));
    }

    /// Hands the helper a range matching the current axis when the axis
    /// changes mid-drag.
    fn rearm_drag_range(&mut self) {
        if let Some(drag) = self.drag {
            let range = self.config.axis.drag_range(self.extent);
            self.helper.begin_track(drag.pointer, range);
        }
    }

    fn notify(&self, f: impl FnOnce(&dyn PullCallback)) {
        if let Some(callback) = &self.callback {
            f(callback.as_ref());
        }
    }
}

impl<D: DragHelper> fmt::Debug for GestureController<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureController")
            .field("state", &self.state)
            .field("axis", &self.config.axis)
            .field("offset", &self.offset())
            .field("active_pointer", &self.active_pointer())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
