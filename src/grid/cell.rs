//! Grid cell geometry with named corners

use serde::Deserialize;

use crate::geodesy::GeoPoint;

/// Named corner of a rectangular grid cell
///
/// The four names are the addressing scheme used by connection rules, so
/// their meaning must stay stable across generation and stitching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    /// North-west corner, the tiling tracking point
    TopLeft,
    /// North-east corner
    TopRight,
    /// South-west corner
    BottomLeft,
    /// South-east corner
    BottomRight,
}

/// One generated grid cell with its four rotated corners
///
/// Corners are computed once during generation and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Assigned number, absent when no numbering scheme is configured
    pub number: Option<i64>,
    /// North-west corner
    pub top_left: GeoPoint,
    /// North-east corner
    pub top_right: GeoPoint,
    /// South-west corner
    pub bottom_left: GeoPoint,
    /// South-east corner
    pub bottom_right: GeoPoint,
}

impl Cell {
    /// Look up a corner by name
    pub const fn corner(&self, corner: Corner) -> GeoPoint {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Center point used for label placement (midpoint of the main diagonal)
    pub const fn center(&self) -> GeoPoint {
        self.top_left.segment_midpoint(self.bottom_right)
    }
}
