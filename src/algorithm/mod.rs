//! Search algorithms driven by lattice neighbour queries

/// Breadth-first flood fill and step distances
pub mod traversal;
