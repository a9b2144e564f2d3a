//! Geographic point representation in decimal degrees

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// A geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude in degrees
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Midpoint of the straight segment between two points in degree space
    ///
    /// Used for label placement inside a cell, where the chord midpoint and
    /// the geodesic midpoint are indistinguishable.
    pub const fn segment_midpoint(self, other: Self) -> Self {
        Self::new(self.lat.midpoint(other.lat), self.lon.midpoint(other.lon))
    }
}
