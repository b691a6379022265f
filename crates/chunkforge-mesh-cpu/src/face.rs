use std::fmt;
use std::ops::{BitOr, BitOrAssign, Sub, SubAssign};

use chunkforge_geom::Direction;

/// Set of cube faces, one bit per [`Direction`] (bit `d.index()`).
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    pub const NONE: FaceSet = FaceSet(0);
    pub const ALL: FaceSet = FaceSet(0b11_1111);

    #[inline]
    pub const fn only(direction: Direction) -> Self {
        FaceSet(1 << direction.index())
    }

    /// Keeps the low six bits; higher bits do not name a face.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        FaceSet(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    #[inline]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.index();
    }

    #[inline]
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !(1 << direction.index());
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in canonical face order: Forward, Backward, Left, Right, Up, Down.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl From<Direction> for FaceSet {
    fn from(direction: Direction) -> Self {
        Self::only(direction)
    }
}

impl FromIterator<Direction> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = FaceSet::NONE;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl BitOr for FaceSet {
    type Output = FaceSet;
    #[inline]
    fn bitor(self, rhs: FaceSet) -> FaceSet {
        FaceSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for FaceSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: FaceSet) {
        self.0 |= rhs.0;
    }
}

impl Sub for FaceSet {
    type Output = FaceSet;
    #[inline]
    fn sub(self, rhs: FaceSet) -> FaceSet {
        FaceSet(self.0 & !rhs.0)
    }
}

impl SubAssign for FaceSet {
    #[inline]
    fn sub_assign(&mut self, rhs: FaceSet) {
        self.0 &= !rhs.0;
    }
}

impl fmt::Debug for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
