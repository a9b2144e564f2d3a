//! Great-circle primitives on a spherical Earth model
//!
//! This module contains the geodesic building blocks for grid construction:
//! - Initial compass bearing between two points
//! - Haversine distance and forward destination projection
//! - Rotation of a point about an arbitrary origin

/// Initial compass bearing between geographic points
pub mod bearing;
/// Haversine distance and forward destination projection
pub mod destination;
/// Geographic point type and Earth constants
pub mod point;
/// Rotation of points about an arbitrary origin
pub mod rotation;

pub use point::GeoPoint;
