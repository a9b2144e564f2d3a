//! Point rotation about a geographic origin
//!
//! True planar rotation is undefined on a curved surface, so rotation is
//! approximated by re-projecting the point from the origin at its original
//! geodesic distance with the bearing offset by the rotation angle. Distance
//! from the origin is preserved exactly: the same distance value is reused
//! for the forward projection, never recomputed. The angular approximation
//! is accurate for grid extents of a few kilometers.

use crate::geodesy::bearing::initial_bearing;
use crate::geodesy::destination::{destination, distance_m};
use crate::geodesy::point::GeoPoint;

/// Rotate `point` about `origin` by `angle_deg` degrees clockwise
///
/// At 0° (mod 360°) this is the identity within floating-point tolerance.
pub fn rotate_about(point: GeoPoint, angle_deg: f64, origin: GeoPoint) -> GeoPoint {
    let meters = distance_m(origin, point);
    let bearing = initial_bearing(origin, point);
    destination(origin, meters, bearing + angle_deg)
}
