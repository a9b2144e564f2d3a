//! Reference grid constants and KML styling defaults

/// Default cell width in meters (reference survey grid)
pub const DEFAULT_CELL_WIDTH_M: f64 = 161.957;
/// Default cell height in meters (reference survey grid)
pub const DEFAULT_CELL_HEIGHT_M: f64 = 100.0;

/// Default bearing for advancing between rows (due west)
pub const DEFAULT_ROW_BEARING_DEG: f64 = 270.0;
/// Default bearing for advancing between columns (due south)
pub const DEFAULT_COL_BEARING_DEG: f64 = 180.0;

// KML colors are aabbggrr hex strings
/// Default cell outline color (green-yellow)
pub const DEFAULT_LINE_COLOR: &str = "ff2fffad";
/// Border treatment for numbers in the colored set (translucent blue)
pub const HIGHLIGHT_BORDER_COLOR: &str = "64ff0000";
/// Border treatment for numbers in the owned set (translucent red)
pub const OWNED_BORDER_COLOR: &str = "640000ff";
/// Border treatment for numbered cells outside both highlight sets
pub const DEFAULT_BORDER_COLOR: &str = "64ff0000";
/// Connector ring outline color (opaque red)
pub const CONNECTOR_LINE_COLOR: &str = "ff0000ff";

/// Outline width for every emitted polygon
pub const CELL_LINE_WIDTH: f64 = 3.0;

/// Extension of generated output files
pub const OUTPUT_EXTENSION: &str = "kml";
