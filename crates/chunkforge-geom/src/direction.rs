use thiserror::Error;

use crate::{IVec3, Vec3, Vec4};

/// One of the six axis-aligned directions a block face can point.
///
/// The declaration order is the canonical face order used everywhere faces are
/// iterated or emitted: Forward, Backward, Left, Right, Up, Down.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    Forward = 0,
    Backward = 1,
    Left = 2,
    Right = 3,
    Up = 4,
    Down = 5,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid direction index {0} (expected 0..6)")]
pub struct InvalidDirection(pub usize);

impl Direction {
    pub const COUNT: usize = 6;

    pub const ALL: [Direction; Direction::COUNT] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Converts an index back into a direction; anything outside `[0..6)` is rejected.
    #[inline]
    pub fn from_index(i: usize) -> Result<Direction, InvalidDirection> {
        Direction::ALL.get(i).copied().ok_or(InvalidDirection(i))
    }

    /// Integer grid delta when stepping out of a block through this face.
    #[inline]
    pub const fn offset(self) -> IVec3 {
        match self {
            Direction::Forward => IVec3::new(0, 0, 1),
            Direction::Backward => IVec3::new(0, 0, -1),
            Direction::Left => IVec3::new(-1, 0, 0),
            Direction::Right => IVec3::new(1, 0, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::Down => IVec3::new(0, -1, 0),
        }
    }

    /// Outward unit normal of a face pointing this way.
    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from(self.offset())
    }

    /// Fixed per-face tangent; `w` is the bitangent handedness sign.
    #[inline]
    pub const fn tangent(self) -> Vec4 {
        match self {
            Direction::Forward => Vec4::new(1.0, 0.0, 0.0, 1.0),
            Direction::Backward => Vec4::new(-1.0, 0.0, 0.0, -1.0),
            Direction::Left => Vec4::new(0.0, 0.0, -1.0, -1.0),
            Direction::Right => Vec4::new(0.0, 0.0, 1.0, 1.0),
            Direction::Up => Vec4::new(1.0, 0.0, 0.0, 1.0),
            Direction::Down => Vec4::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl TryFrom<usize> for Direction {
    type Error = InvalidDirection;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Direction::from_index(value)
    }
}
