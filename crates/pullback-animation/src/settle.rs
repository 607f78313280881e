//! Frame-stepped settle motion.
//!
//! A [`SettleAnimation`] tweens a single coordinate from where the user left
//! it to a target. It is advanced by frame timestamps; the first frame it sees
//! anchors its start time, so the host's clock origin is irrelevant.

use crate::Easing;

/// Base settle duration for a zero-length motion, in milliseconds.
pub const BASE_SETTLE_DURATION_MILLIS: u64 = 256;

/// Upper bound on settle duration, in milliseconds.
pub const MAX_SETTLE_DURATION_MILLIS: u64 = 600;

/// Settle duration for a motion of `distance` pixels inside a drag range of
/// `motion_range` pixels.
///
/// Travelling the whole range takes twice the base duration, capped at
/// [`MAX_SETTLE_DURATION_MILLIS`]. A zero range yields the base duration.
pub fn settle_duration_millis(distance: f32, motion_range: f32) -> u64 {
    if distance == 0.0 {
        return 0;
    }
    if motion_range <= 0.0 {
        return BASE_SETTLE_DURATION_MILLIS;
    }
    let fraction = distance.abs() / motion_range;
    let millis = ((fraction + 1.0) * BASE_SETTLE_DURATION_MILLIS as f32) as u64;
    millis.min(MAX_SETTLE_DURATION_MILLIS)
}

/// Duration and easing of a settle motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl SettleSpec {
    pub fn new(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Spec for settling `distance` pixels inside `motion_range`, with the
    /// default quintic deceleration.
    pub fn for_distance(distance: f32, motion_range: f32) -> Self {
        Self::new(
            settle_duration_millis(distance, motion_range),
            Easing::default(),
        )
    }
}

impl Default for SettleSpec {
    fn default() -> Self {
        Self::new(BASE_SETTLE_DURATION_MILLIS, Easing::default())
    }
}

/// Value produced by one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleFrame {
    pub value: f32,
    pub finished: bool,
}

/// A tween from `start` to `target`, advanced one frame at a time.
#[derive(Debug, Clone)]
pub struct SettleAnimation {
    start: f32,
    target: f32,
    current: f32,
    spec: SettleSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl SettleAnimation {
    pub fn new(start: f32, target: f32, spec: SettleSpec) -> Self {
        Self {
            start,
            target,
            current: start,
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Last value produced by [`step`](Self::step), or `start` before the first frame.
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn spec(&self) -> SettleSpec {
        self.spec
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `frame_time_nanos`.
    ///
    /// Frames earlier than the anchoring frame are treated as the anchor
    /// itself. Once finished, every further step reports the target.
    pub fn step(&mut self, frame_time_nanos: u64) -> SettleFrame {
        if self.finished {
            return SettleFrame {
                value: self.target,
                finished: true,
            };
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = (self.spec.duration_millis * 1_000_000).max(1);
        let linear = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear >= 1.0 {
            self.current = self.target;
            self.finished = true;
        } else {
            let eased = self.spec.easing.transform(linear);
            self.current = self.start + (self.target - self.start) * eased;
        }

        log::trace!(
            "settle step t={}ns value={} finished={}",
            elapsed_nanos,
            self.current,
            self.finished
        );

        SettleFrame {
            value: self.current,
            finished: self.finished,
        }
    }

    /// Jump straight to the target.
    pub fn finish(&mut self) {
        self.current = self.target;
        self.finished = true;
    }
}

#[cfg(test)]
#[path = "tests/settle_tests.rs"]
mod tests;
