//! Spatial data structures and neighbour traversal
//!
//! This module contains spatial-related functionality including:
//! - Value-semantic coordinates
//! - Direction sets and their partition
//! - Grid graphs with on-demand expansion
//! - Lattices adding direction-restricted neighbour queries

/// Immutable coordinates and the grid location trait
pub mod coordinate;
/// Cardinal, ordinal, and omnidirectional direction sets
pub mod direction;
/// Expansion strategies consulted on lookup misses
pub mod extension;
/// Grid graph storage of locations and values
pub mod graph;
/// Neighbour traversal restricted to a direction set
pub mod lattice;

pub use coordinate::{Coordinate, Coordinate3, GridLocation};
pub use direction::{Cardinal, Direction, DirectionClass, Omni, Ordinal};
pub use graph::{GridBounds, GridGraph};
pub use lattice::{CardinalLattice, DiagonalLattice, Lattice, OmniLattice};
