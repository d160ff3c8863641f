use crate::core::constants::{DIGIPIN_GRID, GRID_EXTENTS, SYMBOL_CELLS};
use geo_types::{Rect, coord};

/// Returns the fixed outer bounding box the grid operates within
/// (x = longitude, y = latitude).
pub fn root_bounds() -> Rect<f64> {
    Rect::new(
        coord! { x: GRID_EXTENTS[0], y: GRID_EXTENTS[1] },
        coord! { x: GRID_EXTENTS[2], y: GRID_EXTENTS[3] },
    )
}

/// Returns the (row, col) of the 4x4 cell containing the point within `bounds`.
///
/// Row 0 is the northmost band, so the row index runs opposite to latitude.
/// Both indices are clamped to [0, 3]; a point exactly on the box's north or
/// east edge falls into the last band instead of out of range.
pub(crate) fn cell_indices(lat: f64, lon: f64, bounds: &Rect<f64>) -> (usize, usize) {
    let lat_div = bounds.height() / 4.0;
    let lon_div = bounds.width() / 4.0;

    let row = 3.0 - ((lat - bounds.min().y) / lat_div).floor();
    let col = ((lon - bounds.min().x) / lon_div).floor();

    (row.clamp(0.0, 3.0) as usize, col.clamp(0.0, 3.0) as usize)
}

/// Returns the sub-box of one cell of the 4x4 partition of `bounds`.
///
/// Latitude bands are measured down from the parent's north edge, longitude
/// bands up from its west edge. Both the encoder and the decoder narrow boxes
/// through this single function, so their subdivision arithmetic is identical.
pub(crate) fn cell_bounds(bounds: &Rect<f64>, row: usize, col: usize) -> Rect<f64> {
    let lat_div = bounds.height() / 4.0;
    let lon_div = bounds.width() / 4.0;

    let max_lat = bounds.max().y - lat_div * row as f64;
    let min_lat = bounds.max().y - lat_div * (row as f64 + 1.0);
    let min_lon = bounds.min().x + lon_div * col as f64;
    let max_lon = bounds.min().x + lon_div * (col as f64 + 1.0);

    Rect::new(
        coord! { x: min_lon, y: min_lat },
        coord! { x: max_lon, y: max_lat },
    )
}

/// Returns the grid symbol for a cell.
pub(crate) fn cell_symbol(row: usize, col: usize) -> char {
    DIGIPIN_GRID[row][col]
}

/// Looks up the (row, col) position of a grid symbol.
///
/// Returns `None` for any character outside the 16-symbol alphabet.
pub fn symbol_to_cell(symbol: char) -> Option<(usize, usize)> {
    if (symbol as usize) < SYMBOL_CELLS.len() {
        SYMBOL_CELLS[symbol as usize].map(|(r, c)| (r as usize, c as usize))
    } else {
        None
    }
}
