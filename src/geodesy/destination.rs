//! Haversine distance and forward destination projection on a spherical Earth

use crate::geodesy::point::{EARTH_RADIUS_M, GeoPoint};

/// Great-circle distance between two points in meters (haversine formula)
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let half_dlat = (b.lat - a.lat).to_radians() / 2.0;
    let half_dlon = (b.lon - a.lon).to_radians() / 2.0;

    let h = (lat1.cos() * lat2.cos())
        .mul_add(half_dlon.sin().powi(2), half_dlat.sin().powi(2));

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Destination point reached by traveling `meters` from `start` along the
/// initial compass bearing `bearing_deg`
///
/// Spherical forward formula; the result longitude is normalized to
/// [-180, 180).
pub fn destination(start: GeoPoint, meters: f64, bearing_deg: f64) -> GeoPoint {
    let angular = meters / EARTH_RADIUS_M;
    let bearing = bearing_deg.to_radians();
    let lat1 = start.lat.to_radians();
    let lon1 = start.lon.to_radians();

    let lat2 = lat1
        .sin()
        .mul_add(angular.cos(), lat1.cos() * angular.sin() * bearing.cos())
        .asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(lat1.sin().mul_add(-lat2.sin(), angular.cos()));

    GeoPoint::new(lat2.to_degrees(), normalize_lon(lon2.to_degrees()))
}

// Wraps a longitude into [-180, 180)
fn normalize_lon(lon: f64) -> f64 {
    (lon + 540.0).rem_euclid(360.0) - 180.0
}
