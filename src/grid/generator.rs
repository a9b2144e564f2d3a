//! Grid cell tiling, rotation, classification, and run orchestration
//!
//! Drives the geodesic primitives per cell: unrotated corners are projected
//! from a tracking point, rotated pointwise about the pre-rotation origin,
//! classified, emitted as polygon records, and registered when a stitching
//! rule watches their number. The tracking point advances sequentially
//! between cells, so traversal order is a correctness requirement rather
//! than a performance choice.

use crate::geodesy::destination::destination;
use crate::geodesy::point::GeoPoint;
use crate::geodesy::rotation::rotate_about;
use crate::grid::cell::Cell;
use crate::grid::config::GridConfig;
use crate::grid::feature::{CellLabel, PolygonFeature};
use crate::grid::numbering::cell_number;
use crate::grid::registry::CoordinateRegistry;
use crate::grid::stitch::{ConnectionRule, StitchOutcome, stitch_rings};
use crate::io::configuration::{
    CELL_LINE_WIDTH, CONNECTOR_LINE_COLOR, DEFAULT_BORDER_COLOR, HIGHLIGHT_BORDER_COLOR,
    OWNED_BORDER_COLOR,
};
use crate::io::error::Result;

/// Everything one generation run hands to the output emitter
#[derive(Debug, Default, PartialEq)]
pub struct SurveyOutput {
    /// Cell polygons in generation order, then connector polygons in rule order
    pub features: Vec<PolygonFeature>,
    /// Count of rule entries that referenced unregistered cell numbers
    pub skipped_entries: usize,
}

/// Generate every configured grid, then stitch connector rings
///
/// The coordinate registry lives only for the duration of this call, so
/// repeated runs cannot contaminate each other. Identical inputs produce
/// bit-for-bit identical output.
///
/// # Errors
///
/// Returns a validation error when any grid's `start_numbers` length differs
/// from its row count. All configurations are validated before any geometry
/// is computed, so a rejected run produces no partial output.
pub fn generate(grids: &[GridConfig], rules: &[ConnectionRule]) -> Result<SurveyOutput> {
    for config in grids {
        config.validate()?;
    }

    let mut registry = CoordinateRegistry::for_rules(rules);
    let mut features = Vec::new();

    for config in grids {
        generate_grid(config, &mut registry, &mut features);
    }

    let StitchOutcome {
        rings,
        skipped_entries,
    } = stitch_rings(rules, &registry);

    for ring in rings {
        features.push(PolygonFeature {
            ring,
            line_color: CONNECTOR_LINE_COLOR.to_string(),
            line_width: CELL_LINE_WIDTH,
            fill: false,
            fill_color: None,
            label: None,
        });
    }

    Ok(SurveyOutput {
        features,
        skipped_entries,
    })
}

// Tiles one grid: outer loop over columns, inner over rows.
fn generate_grid(
    config: &GridConfig,
    registry: &mut CoordinateRegistry,
    features: &mut Vec<PolygonFeature>,
) {
    let origin = GeoPoint::new(config.origin_lat, config.origin_lon);
    let mut column_start = origin;

    for col in 0..config.cols {
        let mut tracker = column_start;

        for row in 0..config.rows {
            let top_left = tracker;
            let top_right = destination(top_left, config.cell_width, 90.0);
            let bottom_left = destination(top_left, config.cell_height, 180.0);
            let bottom_right = destination(bottom_left, config.cell_width, 90.0);

            // Rotation is pointwise about the pre-rotation grid origin
            let cell = Cell {
                number: config.start_numbers.as_deref().and_then(|numbers| {
                    cell_number(numbers, row, col, config.cols, config.parity)
                }),
                top_left: rotate_about(top_left, config.angle, origin),
                top_right: rotate_about(top_right, config.angle, origin),
                bottom_left: rotate_about(bottom_left, config.angle, origin),
                bottom_right: rotate_about(bottom_right, config.angle, origin),
            };

            features.push(cell_feature(config, &cell));
            registry.record(&cell);

            // Next row: one cell width along the row bearing from the current
            // unrotated top left, latitude held
            tracker = GeoPoint::new(
                top_left.lat,
                destination(top_left, config.cell_width, config.row_bearing).lon,
            );
        }

        // Next column: one cell height along the column bearing from the
        // original column start, longitude held at the grid origin
        let stepped = destination(
            GeoPoint::new(column_start.lat, origin.lon),
            config.cell_height,
            config.col_bearing,
        );
        column_start = GeoPoint::new(stepped.lat, origin.lon);
    }
}

fn cell_feature(config: &GridConfig, cell: &Cell) -> PolygonFeature {
    let ring = vec![
        (cell.top_left.lon, cell.top_left.lat),
        (cell.top_right.lon, cell.top_right.lat),
        (cell.bottom_right.lon, cell.bottom_right.lat),
        (cell.bottom_left.lon, cell.bottom_left.lat),
        (cell.top_left.lon, cell.top_left.lat),
    ];

    let (fill, fill_color, label) = cell.number.map_or((false, None, None), |number| {
        // First match wins: colored beats owned when a number is in both sets
        let (fill, color) = if config.colored.contains(&number) {
            (true, HIGHLIGHT_BORDER_COLOR)
        } else if config.owned.contains(&number) {
            (true, OWNED_BORDER_COLOR)
        } else {
            (false, DEFAULT_BORDER_COLOR)
        };

        let label = CellLabel {
            position: cell.center(),
            text: number.to_string(),
        };

        (fill, Some(color.to_string()), Some(label))
    });

    PolygonFeature {
        ring,
        line_color: config.line_color.clone(),
        line_width: CELL_LINE_WIDTH,
        fill,
        fill_color,
        label,
    }
}
