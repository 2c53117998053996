//! Expandable two-dimensional grid graphs with direction-set neighbour traversal
//!
//! Grids are built from rows of symbols, store one value per cell, and may
//! grow on demand through an expansion strategy. Lattices add neighbour
//! queries restricted to cardinal, diagonal, or omnidirectional steps, and the
//! geometry helpers measure lattice polygons traced by coordinate paths.

#![forbid(unsafe_code)]

/// Search algorithms built on lattice neighbour queries
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Polygon measures over coordinate paths
pub mod math;
/// Coordinates, directions, grid graphs, and lattices
pub mod spatial;

pub use io::error::{LatticeError, Result};
