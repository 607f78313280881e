/// Identifier the host assigns to a pointer for the duration of its contact.
pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One raw pointer record delivered by the host.
///
/// Positions are in the host view's coordinate space and are expected to be
/// stable while the view itself is being dragged (i.e. parent coordinates,
/// not coordinates of the moving child).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Monotonic event time in milliseconds.
    pub uptime_ms: i64,
    velocity_y: Option<f32>,
}

impl PointerEvent {
    pub fn new(id: PointerId, kind: PointerEventKind, position: Point, uptime_ms: i64) -> Self {
        Self {
            id,
            kind,
            position,
            uptime_ms,
            velocity_y: None,
        }
    }

    pub fn down(id: PointerId, position: Point, uptime_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Down, position, uptime_ms)
    }

    pub fn moved(id: PointerId, position: Point, uptime_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Move, position, uptime_ms)
    }

    pub fn up(id: PointerId, position: Point, uptime_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Up, position, uptime_ms)
    }

    pub fn cancel(id: PointerId, position: Point, uptime_ms: i64) -> Self {
        Self::new(id, PointerEventKind::Cancel, position, uptime_ms)
    }

    /// Attach a vertical velocity (px/sec) resolved by the platform.
    ///
    /// Only meaningful on `Up`: it replaces the velocity the controller would
    /// otherwise estimate from the samples it has seen.
    pub fn with_velocity(mut self, velocity_y: f32) -> Self {
        self.velocity_y = Some(velocity_y);
        self
    }

    pub fn velocity_y(&self) -> Option<f32> {
        self.velocity_y
    }
}
