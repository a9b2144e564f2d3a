//! Corner-level adjacency stitching across registered cells
//!
//! Builds closed boundary rings by concatenating named corners of cells in
//! rule order. Unresolvable cell references are skipped without error (but
//! counted), and accumulations of fewer than three points are discarded.

use serde::Deserialize;

use crate::grid::cell::Corner;
use crate::grid::registry::CoordinateRegistry;

/// One entry of a connection rule: a cell number and the corners to extract
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConnectionEntry {
    /// Number of the cell whose corners are referenced
    pub cell: i64,
    /// Corner names to append, in listed order
    pub corners: Vec<Corner>,
}

/// Ordered sequence of entries describing one stitched ring
///
/// An explicit sequence type, never a map: ring point order must follow rule
/// definition order, not an incidental map iteration order.
pub type ConnectionRule = Vec<ConnectionEntry>;

/// Result of stitching every rule against one registry
#[derive(Debug, Default, PartialEq)]
pub struct StitchOutcome {
    /// Closed rings, one per rule that resolved at least three points
    pub rings: Vec<Vec<(f64, f64)>>,
    /// Count of rule entries whose cell number was absent from the registry
    pub skipped_entries: usize,
}

/// Build closed connector rings from `rules` using registered cell corners
///
/// Ring point order follows rule definition order exactly, never geographic
/// order; callers must list corners in a traversal order that produces a
/// non-self-intersecting boundary.
pub fn stitch_rings(rules: &[ConnectionRule], registry: &CoordinateRegistry) -> StitchOutcome {
    let mut outcome = StitchOutcome::default();

    for rule in rules {
        let mut coords: Vec<(f64, f64)> = Vec::new();

        for entry in rule {
            let Some(cell) = registry.get(entry.cell) else {
                outcome.skipped_entries += 1;
                continue;
            };
            for corner in &entry.corners {
                let point = cell.corner(*corner);
                coords.push((point.lon, point.lat));
            }
        }

        // Fewer than three points cannot form a boundary
        if coords.len() >= 3 {
            if let Some(first) = coords.first().copied() {
                coords.push(first);
            }
            outcome.rings.push(coords);
        }
    }

    outcome
}
