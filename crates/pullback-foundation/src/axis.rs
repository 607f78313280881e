//! Which way a view may be pulled.

use std::fmt;
use std::ops::BitOr;

/// A single vertical direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullDirection {
    /// Towards negative offsets (the view moves up).
    Up,
    /// Towards positive offsets (the view moves down).
    Down,
}

impl PullDirection {
    /// Direction of a non-zero offset, `None` at rest.
    pub fn of_offset(offset: i32) -> Option<Self> {
        match offset {
            o if o > 0 => Some(PullDirection::Down),
            o if o < 0 => Some(PullDirection::Up),
            _ => None,
        }
    }
}

impl fmt::Display for PullDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullDirection::Up => f.write_str("up"),
            PullDirection::Down => f.write_str("down"),
        }
    }
}

/// Set of directions a view may be pulled in.
///
/// Behaves like the flag set `{Up = 1, Down = 2}` but only the four legal
/// combinations are representable. `None` disables dragging entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragAxis {
    None,
    Up,
    Down,
    #[default]
    Both,
}

impl DragAxis {
    pub const UP_BIT: u8 = 1;
    pub const DOWN_BIT: u8 = 1 << 1;

    /// Builds an axis from flag bits; bits other than `UP_BIT` and
    /// `DOWN_BIT` are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match (bits & Self::UP_BIT != 0, bits & Self::DOWN_BIT != 0) {
            (true, true) => DragAxis::Both,
            (true, false) => DragAxis::Up,
            (false, true) => DragAxis::Down,
            (false, false) => DragAxis::None,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            DragAxis::None => 0,
            DragAxis::Up => Self::UP_BIT,
            DragAxis::Down => Self::DOWN_BIT,
            DragAxis::Both => Self::UP_BIT | Self::DOWN_BIT,
        }
    }

    pub const fn allows(self, direction: PullDirection) -> bool {
        match direction {
            PullDirection::Up => self.bits() & Self::UP_BIT != 0,
            PullDirection::Down => self.bits() & Self::DOWN_BIT != 0,
        }
    }

    pub const fn is_enabled(self) -> bool {
        !matches!(self, DragAxis::None)
    }

    pub const fn union(self, other: DragAxis) -> Self {
        Self::from_bits(self.bits() | other.bits())
    }

    pub const fn from_direction(direction: PullDirection) -> Self {
        match direction {
            PullDirection::Up => DragAxis::Up,
            PullDirection::Down => DragAxis::Down,
        }
    }

    /// Constrains a raw view top to the allowed directions.
    pub fn clamp(self, raw_top: i32) -> i32 {
        match self {
            DragAxis::Both => raw_top,
            DragAxis::Up => raw_top.min(0),
            DragAxis::Down => raw_top.max(0),
            DragAxis::None => 0,
        }
    }

    /// How far the drag mechanism may carry a view of height `extent`.
    ///
    /// With both directions enabled the view can travel a full extent either
    /// way, so the range doubles.
    pub fn drag_range(self, extent: i32) -> i32 {
        match self {
            DragAxis::None => 0,
            DragAxis::Up | DragAxis::Down => extent,
            DragAxis::Both => extent.saturating_mul(2),
        }
    }
}

impl From<PullDirection> for DragAxis {
    fn from(direction: PullDirection) -> Self {
        DragAxis::from_direction(direction)
    }
}

impl BitOr for DragAxis {
    type Output = DragAxis;

    fn bitor(self, rhs: DragAxis) -> DragAxis {
        self.union(rhs)
    }
}

impl BitOr<PullDirection> for DragAxis {
    type Output = DragAxis;

    fn bitor(self, rhs: PullDirection) -> DragAxis {
        self.union(rhs.into())
    }
}
