//! Output records handed to the KML emitter

use crate::geodesy::GeoPoint;

/// Centered text label for a numbered cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellLabel {
    /// Label anchor point
    pub position: GeoPoint,
    /// Label text, the cell's decimal number
    pub text: String,
}

/// One polygon record for the emitter: a cell outline or a connector ring
///
/// Rings are created once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFeature {
    /// Closed (lon, lat) boundary; the first point is repeated as the last
    pub ring: Vec<(f64, f64)>,
    /// KML line color (aabbggrr)
    pub line_color: String,
    /// Outline width in pixels
    pub line_width: f64,
    /// Whether the polygon interior is filled
    pub fill: bool,
    /// Border treatment color (aabbggrr); present only for numbered cells
    pub fill_color: Option<String>,
    /// Centered number label; present only for numbered cells
    pub label: Option<CellLabel>,
}
