//! Declarative grid configuration and validation

use std::collections::HashSet;

use serde::Deserialize;

use crate::io::configuration::{
    DEFAULT_CELL_HEIGHT_M, DEFAULT_CELL_WIDTH_M, DEFAULT_COL_BEARING_DEG, DEFAULT_LINE_COLOR,
    DEFAULT_ROW_BEARING_DEG,
};
use crate::io::error::{GridError, Result};

/// Declarative description of one rotated survey grid
///
/// Supplied once per grid and read-only during generation. Optional fields
/// default to the reference grid's values so project files stay terse.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Latitude of the grid origin (top-left corner of cell (0, 0)) in degrees
    pub origin_lat: f64,
    /// Longitude of the grid origin in degrees
    pub origin_lon: f64,
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Rotation angle about the origin in degrees, clockwise
    #[serde(default)]
    pub angle: f64,
    /// Per-row starting numbers; length must equal `rows` when present
    #[serde(default)]
    pub start_numbers: Option<Vec<i64>>,
    /// Compass bearing for the in-row advance: the tracker steps one cell
    /// width per row with latitude held
    #[serde(default = "default_row_bearing")]
    pub row_bearing: f64,
    /// Compass bearing for the between-column advance: one cell height per
    /// column with longitude held at the origin
    #[serde(default = "default_col_bearing")]
    pub col_bearing: f64,
    /// Cell width in meters
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,
    /// Cell height in meters
    #[serde(default = "default_cell_height")]
    pub cell_height: f64,
    /// Numbers highlighted with the filled blue border treatment
    #[serde(default)]
    pub colored: HashSet<i64>,
    /// Numbers highlighted with the filled red border treatment
    #[serde(default)]
    pub owned: HashSet<i64>,
    /// Serpentine parity flag: rows whose index parity matches run reversed
    #[serde(default)]
    pub parity: u8,
    /// KML line color (aabbggrr) for cell outlines
    #[serde(default = "default_line_color")]
    pub line_color: String,
}

impl GridConfig {
    /// Validate the configuration before any geometry is computed
    ///
    /// # Errors
    ///
    /// Returns [`GridError::StartNumberMismatch`] when `start_numbers` is
    /// present with a length different from `rows`.
    pub fn validate(&self) -> Result<()> {
        if let Some(numbers) = &self.start_numbers
            && numbers.len() != self.rows
        {
            return Err(GridError::StartNumberMismatch {
                rows: self.rows,
                start_numbers: numbers.len(),
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin_lat: 0.0,
            origin_lon: 0.0,
            rows: 0,
            cols: 0,
            angle: 0.0,
            start_numbers: None,
            row_bearing: default_row_bearing(),
            col_bearing: default_col_bearing(),
            cell_width: default_cell_width(),
            cell_height: default_cell_height(),
            colored: HashSet::new(),
            owned: HashSet::new(),
            parity: 0,
            line_color: default_line_color(),
        }
    }
}

const fn default_row_bearing() -> f64 {
    DEFAULT_ROW_BEARING_DEG
}

const fn default_col_bearing() -> f64 {
    DEFAULT_COL_BEARING_DEG
}

const fn default_cell_width() -> f64 {
    DEFAULT_CELL_WIDTH_M
}

const fn default_cell_height() -> f64 {
    DEFAULT_CELL_HEIGHT_M
}

fn default_line_color() -> String {
    DEFAULT_LINE_COLOR.to_string()
}
