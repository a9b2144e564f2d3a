//! Per-run registry of cells referenced by stitching rules

use std::collections::{HashMap, HashSet};

use crate::grid::cell::Cell;
use crate::grid::stitch::ConnectionRule;

/// Records the corners of cells whose numbers appear in any connection rule
///
/// Scoped to a single generation run and discarded once stitching completes,
/// so repeated runs never see each other's coordinates. Memory is bounded by
/// the number of watched numbers, not by grid size.
#[derive(Debug, Default)]
pub struct CoordinateRegistry {
    watched: HashSet<i64>,
    cells: HashMap<i64, Cell>,
}

impl CoordinateRegistry {
    /// Create a registry watching every cell number referenced by `rules`
    pub fn for_rules(rules: &[ConnectionRule]) -> Self {
        let watched = rules
            .iter()
            .flat_map(|rule| rule.iter().map(|entry| entry.cell))
            .collect();
        Self {
            watched,
            cells: HashMap::new(),
        }
    }

    /// Whether `number` appears in at least one connection rule
    pub fn is_watched(&self, number: i64) -> bool {
        self.watched.contains(&number)
    }

    /// Record a cell if its number is watched; unwatched cells are dropped
    pub fn record(&mut self, cell: &Cell) {
        if let Some(number) = cell.number
            && self.watched.contains(&number)
        {
            self.cells.insert(number, *cell);
        }
    }

    /// Look up a registered cell by number
    pub fn get(&self, number: i64) -> Option<&Cell> {
        self.cells.get(&number)
    }

    /// Number of cells currently registered
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells have been registered
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
