//! Vertical pull-to-dismiss gesture recognizer for Pullback
//!
//! A [`GestureController`] sits on a container view. The host feeds it raw
//! pointer records and animation frames; it drags the view through a
//! [`DragHelper`], reports pull progress to a [`PullCallback`] and decides on
//! release whether the pull dismissed the view or should snap back.

pub mod axis;
pub mod config;
pub mod controller;
pub mod drag_helper;
pub mod gesture_constants;
pub mod input;
pub mod release;
pub mod velocity_tracker;

pub use axis::{DragAxis, PullDirection};
pub use config::{ConfigError, PullBackConfig};
pub use controller::{pull_progress, GestureController, GestureState, HostView, PullCallback};
pub use drag_helper::{DragHelper, ViewDragTracker};
pub use input::{Point, PointerEvent, PointerEventKind, PointerId};
pub use release::{resolve, ReleaseDecision, ReleaseOutcome};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::axis::{DragAxis, PullDirection};
    pub use crate::config::PullBackConfig;
    pub use crate::controller::{GestureController, GestureState, HostView, PullCallback};
    pub use crate::drag_helper::{DragHelper, ViewDragTracker};
    pub use crate::input::{Point, PointerEvent};
}
