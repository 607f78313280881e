//! Shared gesture constants for pull gestures.
//!
//! Velocities are in logical pixels per second. For very high-density touch
//! screens the host should scale the fling thresholds by its density before
//! handing them to [`PullBackConfig`](crate::PullBackConfig).

/// Default minimum release velocity for a gesture to count as a fling.
///
/// Matches Android's `ViewConfiguration` minimum fling velocity (50dp/s) on a
/// baseline density.
pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum velocity reported by the built-in velocity tracker.
///
/// Matches Android's default maximum fling velocity on a baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Divisor applied to the view extent to get the release slop of a fling.
pub const FLING_SLOP_DIVISOR: i32 = 6;

/// Divisor applied to the view extent to get the release slop of a slow drag.
pub const DRAG_SLOP_DIVISOR: i32 = 3;
