//! Initial great-circle compass bearing between geographic points

use crate::geodesy::point::GeoPoint;

/// Initial compass bearing from `a` to `b` in degrees, normalized to [0, 360)
///
/// Standard great-circle formula: atan2 of sine/cosine terms built from the
/// latitude pair and the longitude difference. Coincident points yield 0.
pub fn initial_bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let x = delta_lon.sin() * lat2.cos();
    let y = lat1
        .cos()
        .mul_add(lat2.sin(), -(lat1.sin() * lat2.cos() * delta_lon.cos()));

    (x.atan2(y).to_degrees() + 360.0) % 360.0
}
