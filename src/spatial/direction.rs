//! Closed direction sets for lattice traversal
//!
//! Offsets are `(d_row, d_col)` pairs with rows growing downwards, so `Top`
//! moves to the previous row and `Right` to the next column. Offsets inside a
//! set are pairwise distinct, which makes the reverse lookup in
//! [`Direction::from_offset`] unambiguous.

use std::fmt::Debug;
use std::hash::Hash;

/// Fixed partition of the omnidirectional set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DirectionClass {
    /// Axis-aligned single step
    Cardinal,
    /// Diagonal single step
    Ordinal,
}

/// A closed set of single-step directions
pub trait Direction: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every member of the set, in a fixed clockwise order starting at the top
    const ALL: &'static [Self];

    /// Row and column delta of one step
    fn offset(self) -> (i64, i64);

    /// Which half of the omnidirectional partition this direction belongs to
    fn class(self) -> DirectionClass;

    /// Direction pointing the other way
    fn opposite(self) -> Self;

    /// The member whose offset equals the given delta, if any
    fn from_offset(d_row: i64, d_col: i64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|direction| direction.offset() == (d_row, d_col))
    }
}

/// Four axis-aligned directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cardinal {
    /// Previous row
    Top,
    /// Next column
    Right,
    /// Next row
    Bottom,
    /// Previous column
    Left,
}

impl Cardinal {
    /// Quarter turn clockwise
    pub const fn clockwise(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }

    /// Quarter turn counter-clockwise
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::Top => Self::Left,
            Self::Right => Self::Top,
            Self::Bottom => Self::Right,
            Self::Left => Self::Bottom,
        }
    }
}

impl Direction for Cardinal {
    const ALL: &'static [Self] = &[Self::Top, Self::Right, Self::Bottom, Self::Left];

    fn offset(self) -> (i64, i64) {
        match self {
            Self::Top => (-1, 0),
            Self::Right => (0, 1),
            Self::Bottom => (1, 0),
            Self::Left => (0, -1),
        }
    }

    fn class(self) -> DirectionClass {
        DirectionClass::Cardinal
    }

    fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }
}

/// Four diagonal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ordinal {
    /// Previous row, next column
    TopRight,
    /// Next row, next column
    BottomRight,
    /// Next row, previous column
    BottomLeft,
    /// Previous row, previous column
    TopLeft,
}

impl Direction for Ordinal {
    const ALL: &'static [Self] = &[
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopLeft,
    ];

    fn offset(self) -> (i64, i64) {
        match self {
            Self::TopRight => (-1, 1),
            Self::BottomRight => (1, 1),
            Self::BottomLeft => (1, -1),
            Self::TopLeft => (-1, -1),
        }
    }

    fn class(self) -> DirectionClass {
        DirectionClass::Ordinal
    }

    fn opposite(self) -> Self {
        match self {
            Self::TopRight => Self::BottomLeft,
            Self::BottomRight => Self::TopLeft,
            Self::BottomLeft => Self::TopRight,
            Self::TopLeft => Self::BottomRight,
        }
    }
}

/// All eight single-step directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Omni {
    /// Previous row
    Top,
    /// Previous row, next column
    TopRight,
    /// Next column
    Right,
    /// Next row, next column
    BottomRight,
    /// Next row
    Bottom,
    /// Next row, previous column
    BottomLeft,
    /// Previous column
    Left,
    /// Previous row, previous column
    TopLeft,
}

impl Omni {
    /// Project onto the cardinal subset
    pub const fn as_cardinal(self) -> Option<Cardinal> {
        match self {
            Self::Top => Some(Cardinal::Top),
            Self::Right => Some(Cardinal::Right),
            Self::Bottom => Some(Cardinal::Bottom),
            Self::Left => Some(Cardinal::Left),
            _ => None,
        }
    }

    /// Project onto the ordinal subset
    pub const fn as_ordinal(self) -> Option<Ordinal> {
        match self {
            Self::TopRight => Some(Ordinal::TopRight),
            Self::BottomRight => Some(Ordinal::BottomRight),
            Self::BottomLeft => Some(Ordinal::BottomLeft),
            Self::TopLeft => Some(Ordinal::TopLeft),
            _ => None,
        }
    }

    /// Members of one half of the partition
    pub fn of_class(class: DirectionClass) -> impl Iterator<Item = Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(move |direction| direction.class() == class)
    }
}

impl Direction for Omni {
    const ALL: &'static [Self] = &[
        Self::Top,
        Self::TopRight,
        Self::Right,
        Self::BottomRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::Left,
        Self::TopLeft,
    ];

    fn offset(self) -> (i64, i64) {
        match self {
            Self::Top => (-1, 0),
            Self::TopRight => (-1, 1),
            Self::Right => (0, 1),
            Self::BottomRight => (1, 1),
            Self::Bottom => (1, 0),
            Self::BottomLeft => (1, -1),
            Self::Left => (0, -1),
            Self::TopLeft => (-1, -1),
        }
    }

    fn class(self) -> DirectionClass {
        match self {
            Self::Top | Self::Right | Self::Bottom | Self::Left => DirectionClass::Cardinal,
            Self::TopRight | Self::BottomRight | Self::BottomLeft | Self::TopLeft => {
                DirectionClass::Ordinal
            }
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::TopRight => Self::BottomLeft,
            Self::Right => Self::Left,
            Self::BottomRight => Self::TopLeft,
            Self::Bottom => Self::Top,
            Self::BottomLeft => Self::TopRight,
            Self::Left => Self::Right,
            Self::TopLeft => Self::BottomRight,
        }
    }
}

impl From<Cardinal> for Omni {
    fn from(direction: Cardinal) -> Self {
        match direction {
            Cardinal::Top => Self::Top,
            Cardinal::Right => Self::Right,
            Cardinal::Bottom => Self::Bottom,
            Cardinal::Left => Self::Left,
        }
    }
}

impl From<Ordinal> for Omni {
    fn from(direction: Ordinal) -> Self {
        match direction {
            Ordinal::TopRight => Self::TopRight,
            Ordinal::BottomRight => Self::BottomRight,
            Ordinal::BottomLeft => Self::BottomLeft,
            Ordinal::TopLeft => Self::TopLeft,
        }
    }
}
