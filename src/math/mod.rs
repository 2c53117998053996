//! Mathematical utilities over coordinate paths

/// Shoelace area and Pick's theorem interior counts
pub mod geometry;

pub use geometry::{enclosed_area, interior_point_count, measure_path};
