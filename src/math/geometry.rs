//! Closed-form measures of lattice polygons traced as coordinate paths
//!
//! Paths list every boundary lattice point once, in traversal order, and close
//! implicitly from the last point back to the first. The functions assume this
//! without checking; points out of order give a wrong but non-failing result.
//!
//! For axis-aligned unit-step paths the shoelace sum is always even, so the
//! halving is exact. Other lattice polygons may have half-integer areas, which
//! integer division rounds towards zero.

use crate::spatial::coordinate::Coordinate;
use num_traits::{PrimInt, Signed};

/// Boundary, area, and interior counts of one path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathMeasure<T> {
    /// Number of points on the path
    pub boundary: T,
    /// Enclosed area from the shoelace formula
    pub area: T,
    /// Lattice points strictly inside, from Pick's theorem
    pub interior: T,
}

/// Measure a closed path in a single pass
///
/// Accepts a materialised collection or a lazy sequence; the sequence is
/// consumed exactly once, so it must be finite. An empty path measures zero
/// throughout.
pub fn measure_path<T, I>(path: I) -> PathMeasure<T>
where
    T: PrimInt + Signed,
    I: IntoIterator<Item = Coordinate<T>>,
{
    let mut points = path.into_iter();
    let Some(first) = points.next() else {
        return PathMeasure {
            boundary: T::zero(),
            area: T::zero(),
            interior: T::zero(),
        };
    };

    let mut boundary = T::one();
    let mut twice_area = T::zero();
    let mut previous = first;
    for point in points {
        twice_area = twice_area + cross(&previous, &point);
        boundary = boundary + T::one();
        previous = point;
    }
    twice_area = twice_area + cross(&previous, &first);

    let two = T::one() + T::one();
    let area = twice_area.abs() / two;
    PathMeasure {
        boundary,
        area,
        interior: area + T::one() - boundary / two,
    }
}

/// Area enclosed by a closed path (shoelace formula)
pub fn enclosed_area<T, I>(path: I) -> T
where
    T: PrimInt + Signed,
    I: IntoIterator<Item = Coordinate<T>>,
{
    measure_path(path).area
}

/// Lattice points strictly inside a closed path (Pick's theorem)
///
/// Computed as `area + 1 - boundary / 2`, where `boundary` is the number of
/// points on the path.
pub fn interior_point_count<T, I>(path: I) -> T
where
    T: PrimInt + Signed,
    I: IntoIterator<Item = Coordinate<T>>,
{
    measure_path(path).interior
}

fn cross<T: PrimInt>(a: &Coordinate<T>, b: &Coordinate<T>) -> T {
    a.x() * b.y() - b.x() * a.y()
}
