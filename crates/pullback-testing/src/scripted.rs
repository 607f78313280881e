//! A drag helper whose settle length is fixed up front.

use pullback_foundation::{DragHelper, PointerId};

/// Calls observed by [`ScriptedDragHelper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperCall {
    BeginTrack { pointer: PointerId, drag_range: i32 },
    RequestSettle { target: i32 },
    Abort,
}

/// [`DragHelper`] that tracks positions like a real view but reports
/// "still settling" for exactly `settle_frames - 1` frames, then finishes.
#[derive(Debug, Clone)]
pub struct ScriptedDragHelper {
    top: i32,
    drag_range: i32,
    settle_frames: usize,
    remaining: usize,
    target: Option<i32>,
    calls: Vec<HelperCall>,
}

impl ScriptedDragHelper {
    pub fn new(settle_frames: usize) -> Self {
        Self {
            top: 0,
            drag_range: 0,
            settle_frames,
            remaining: 0,
            target: None,
            calls: Vec::new(),
        }
    }

    pub fn calls(&self) -> &[HelperCall] {
        &self.calls
    }

    pub fn is_settling(&self) -> bool {
        self.target.is_some()
    }
}

impl DragHelper for ScriptedDragHelper {
    fn begin_track(&mut self, pointer: PointerId, drag_range: i32) {
        self.drag_range = drag_range;
        self.target = None;
        self.calls.push(HelperCall::BeginTrack {
            pointer,
            drag_range,
        });
    }

    fn clamp_and_report(&mut self, top: i32) -> i32 {
        self.top = top.clamp(-self.drag_range, self.drag_range);
        self.top
    }

    fn request_settle(&mut self, target: i32) -> bool {
        self.calls.push(HelperCall::RequestSettle { target });
        self.target = Some(target);
        self.remaining = self.settle_frames;
        self.top != target
    }

    fn step_settle(&mut self, _frame_time_nanos: u64) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.top = target;
            self.target = None;
            return false;
        }
        // Close a proportional share of the remaining gap.
        let gap = target - self.top;
        self.top += gap / (self.remaining as i32 + 1);
        true
    }

    fn current_top(&self) -> i32 {
        self.top
    }

    fn abort(&mut self) {
        self.calls.push(HelperCall::Abort);
        if let Some(target) = self.target.take() {
            self.top = target;
        }
    }
}
