//! Testing utilities and harness for Pullback

pub mod recording;
pub mod robot;
pub mod scripted;

pub use recording::{check_gesture_order, FakeHost, PullEvent, RecordingCallback};
pub use robot::{GestureRobot, FRAME_NANOS};
pub use scripted::{HelperCall, ScriptedDragHelper};

pub mod prelude {
    pub use crate::recording::*;
    pub use crate::robot::*;
    pub use crate::scripted::*;
}
