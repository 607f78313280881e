//! Settle animations for Pullback
//!
//! A dragged view that is let go short of its dismissal threshold slides back
//! to rest. This crate provides the easing curves and the frame-stepped tween
//! that drive that motion. Nothing here owns a clock: callers feed frame
//! timestamps from whatever frame source the host provides.

mod easing;
mod settle;

pub use easing::*;
pub use settle::*;

pub mod prelude {
    pub use crate::easing::Easing;
    pub use crate::settle::{settle_duration_millis, SettleAnimation, SettleFrame, SettleSpec};
}
