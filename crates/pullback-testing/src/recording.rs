//! Recording doubles for the controller's collaborators.

use pullback_foundation::{HostView, PullCallback, PullDirection};
use std::cell::{Cell, RefCell};

/// One notification observed by [`RecordingCallback`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullEvent {
    Start,
    Pull {
        direction: PullDirection,
        progress: f32,
    },
    Cancel(PullDirection),
    Complete(PullDirection),
}

impl PullEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PullEvent::Cancel(_) | PullEvent::Complete(_))
    }
}

/// [`PullCallback`] that records every notification in order.
#[derive(Debug, Default)]
pub struct RecordingCallback {
    events: RefCell<Vec<PullEvent>>,
}

impl RecordingCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PullEvent> {
        self.events.borrow().clone()
    }

    /// Returns the recorded events and starts over.
    pub fn take_events(&self) -> Vec<PullEvent> {
        self.events.take()
    }

    pub fn last(&self) -> Option<PullEvent> {
        self.events.borrow().last().copied()
    }

    /// Progress values reported so far, in order.
    pub fn progress_values(&self) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                PullEvent::Pull { progress, .. } => Some(*progress),
                _ => None,
            })
            .collect()
    }

    pub fn terminal_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.is_terminal())
            .count()
    }
}

impl PullCallback for RecordingCallback {
    fn on_pull_start(&self) {
        self.events.borrow_mut().push(PullEvent::Start);
    }

    fn on_pull(&self, direction: PullDirection, progress: f32) {
        self.events.borrow_mut().push(PullEvent::Pull {
            direction,
            progress,
        });
    }

    fn on_pull_cancel(&self, direction: PullDirection) {
        self.events.borrow_mut().push(PullEvent::Cancel(direction));
    }

    fn on_pull_complete(&self, direction: PullDirection) {
        self.events.borrow_mut().push(PullEvent::Complete(direction));
    }
}

/// Checks that `events` is a sequence of well-formed gestures: each begins
/// with `Start`, continues with progress in [0, 1], and has at most one
/// terminal event with nothing after it but the next `Start`.
pub fn check_gesture_order(events: &[PullEvent]) -> Result<(), String> {
    let mut in_gesture = false;
    let mut terminated = false;
    for (index, event) in events.iter().enumerate() {
        match event {
            PullEvent::Start => {
                in_gesture = true;
                terminated = false;
            }
            PullEvent::Pull { progress, .. } => {
                if !in_gesture || terminated {
                    return Err(format!("progress outside a live gesture at {index}"));
                }
                if !(0.0..=1.0).contains(progress) {
                    return Err(format!("progress {progress} out of range at {index}"));
                }
            }
            PullEvent::Cancel(_) | PullEvent::Complete(_) => {
                if !in_gesture {
                    return Err(format!("terminal event without start at {index}"));
                }
                if terminated {
                    return Err(format!("second terminal event at {index}"));
                }
                terminated = true;
            }
        }
    }
    Ok(())
}

/// [`HostView`] with a settable height that counts frame requests.
#[derive(Debug)]
pub struct FakeHost {
    height: Cell<i32>,
    frame_requests: Cell<usize>,
    pending_frame: Cell<bool>,
}

impl FakeHost {
    pub fn new(height: i32) -> Self {
        Self {
            height: Cell::new(height),
            frame_requests: Cell::new(0),
            pending_frame: Cell::new(false),
        }
    }

    pub fn set_height(&self, height: i32) {
        self.height.set(height);
    }

    /// Total number of frames ever requested.
    pub fn frame_requests(&self) -> usize {
        self.frame_requests.get()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.get()
    }

    /// Consumes the pending frame request, if any.
    pub fn take_frame_request(&self) -> bool {
        self.pending_frame.replace(false)
    }
}

impl HostView for FakeHost {
    fn height(&self) -> i32 {
        self.height.get()
    }

    fn request_frame(&self) {
        self.frame_requests.set(self.frame_requests.get() + 1);
        self.pending_frame.set(true);
    }
}
