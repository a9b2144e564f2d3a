//! Rotated survey grid generation on the Earth's surface using geodesic projections
//!
//! The system tiles rectangular cells from a geographic origin, rotates them about
//! that origin via bearing/distance projections, numbers them with a serpentine
//! policy, and stitches named cell corners into connector polygons for KML export.

#![forbid(unsafe_code)]

/// Great-circle bearing, distance, destination, and rotation primitives
pub mod geodesy;
/// Grid configuration, cell tiling, numbering, registry, and stitching
pub mod grid;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{GridError, Result};
