//! Serpentine (boustrophedon) cell numbering policy
//!
//! Alternate rows are numbered in opposite directions so consecutive numbers
//! follow a back-and-forth path across the grid, matching real-world
//! plot/parcel numbering conventions.

/// Number for the cell at (`row`, `col`) in a grid `cols` wide
///
/// Rows whose index parity matches the `parity` flag count from the far end
/// of the row; all other rows count forward from their starting number.
/// Returns `None` when `row` has no starting number; configuration
/// validation rejects mismatched lengths before generation, so this only
/// occurs for unnumbered grids.
pub fn cell_number(
    start_numbers: &[i64],
    row: usize,
    col: usize,
    cols: usize,
    parity: u8,
) -> Option<i64> {
    let start = *start_numbers.get(row)?;
    let offset = if row % 2 == usize::from(parity) {
        cols - 1 - col
    } else {
        col
    };
    Some(start + offset as i64)
}
