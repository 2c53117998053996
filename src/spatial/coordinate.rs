//! Immutable value-semantic coordinates in two and three dimensions
//!
//! Coordinates never change after construction; moving a coordinate produces a
//! new instance. Equality, ordering, and hashing are structural over all
//! components, so coordinates work directly as map keys.

use crate::io::error::{LatticeError, Result};
use num_traits::{Num, Signed};
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Something that names a single grid cell by row and column
///
/// The grid graph uses this to place a location in its row index and to
/// compute neighbour offsets, so the reported row and column must stay fixed
/// for the lifetime of the value.
pub trait GridLocation: Copy + Eq + Hash + fmt::Debug {
    /// Row of the named cell
    fn row(&self) -> i64;

    /// Column of the named cell
    fn col(&self) -> i64;
}

/// Ordered pair of numeric components
///
/// When used as a grid location, `x` is the row and `y` is the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate<T> {
    x: T,
    y: T,
}

impl<T> Coordinate<T> {
    /// Create a coordinate from its two components
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Coordinate<T> {
    /// First component
    pub const fn x(&self) -> T {
        self.x
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.y
    }

    /// Components in construction order
    pub const fn to_coordinate_list(&self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Build a coordinate from exactly two values
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidArity`] if `values` does not hold exactly two elements
    pub fn parse(values: &[T]) -> Result<Self> {
        match values {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(LatticeError::InvalidArity {
                expected: 2,
                found: values.len(),
            }),
        }
    }

    /// Build one coordinate per group of two values
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidArity`] for the first group whose length is not two
    pub fn parse_all<I, S>(groups: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        groups
            .into_iter()
            .map(|group| Self::parse(group.as_ref()))
            .collect()
    }
}

impl<T: Copy + Num> Coordinate<T> {
    /// New coordinate shifted by the given deltas
    pub fn offset(&self, dx: T, dy: T) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl<T: Copy + Num + Signed> Coordinate<T> {
    /// Sum of absolute component differences
    pub fn manhattan_distance(&self, other: &Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl<T: Num> Add for Coordinate<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Num> Sub for Coordinate<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: fmt::Display> fmt::Display for Coordinate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> FromStr for Coordinate<T>
where
    T: Copy + FromStr,
    T::Err: fmt::Display,
{
    type Err = LatticeError;

    /// Parse comma separated components such as `"3,4"`
    fn from_str(s: &str) -> Result<Self> {
        let values = parse_components(s)?;
        Self::parse(&values)
    }
}

/// Ordered triple of numeric components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate3<T> {
    x: T,
    y: T,
    z: T,
}

impl<T> Coordinate3<T> {
    /// Create a coordinate from its three components
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Coordinate3<T> {
    /// First component
    pub const fn x(&self) -> T {
        self.x
    }

    /// Second component
    pub const fn y(&self) -> T {
        self.y
    }

    /// Third component
    pub const fn z(&self) -> T {
        self.z
    }

    /// Components in construction order
    pub const fn to_coordinate_list(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Build a coordinate from exactly three values
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidArity`] if `values` does not hold exactly three elements
    pub fn parse(values: &[T]) -> Result<Self> {
        match values {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(LatticeError::InvalidArity {
                expected: 3,
                found: values.len(),
            }),
        }
    }

    /// Build one coordinate per group of three values
    ///
    /// # Errors
    ///
    /// Returns [`LatticeError::InvalidArity`] for the first group whose length is not three
    pub fn parse_all<I, S>(groups: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[T]>,
    {
        groups
            .into_iter()
            .map(|group| Self::parse(group.as_ref()))
            .collect()
    }
}

impl<T: Copy + Num + Signed> Coordinate3<T> {
    /// Sum of absolute component differences
    pub fn manhattan_distance(&self, other: &Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

impl<T: Num> Add for Coordinate3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Num> Sub for Coordinate3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: fmt::Display> fmt::Display for Coordinate3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl<T> FromStr for Coordinate3<T>
where
    T: Copy + FromStr,
    T::Err: fmt::Display,
{
    type Err = LatticeError;

    /// Parse comma separated components such as `"1,2,3"`
    fn from_str(s: &str) -> Result<Self> {
        let values = parse_components(s)?;
        Self::parse(&values)
    }
}

fn parse_components<T>(s: &str) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    s.split(',')
        .map(str::trim)
        .map(|part| {
            part.parse::<T>()
                .map_err(|e| LatticeError::InvalidComponent {
                    value: part.to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

// Only integer types that widen into i64 without loss can name grid cells
macro_rules! impl_grid_location {
    ($($t:ty),*) => {
        $(
            impl GridLocation for Coordinate<$t> {
                fn row(&self) -> i64 {
                    i64::from(self.x)
                }

                fn col(&self) -> i64 {
                    i64::from(self.y)
                }
            }
        )*
    };
}

impl_grid_location!(i8, i16, i32, i64, u8, u16, u32);
