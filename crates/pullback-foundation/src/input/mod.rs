pub mod types;

pub use types::{Point, PointerEvent, PointerEventKind, PointerId};
