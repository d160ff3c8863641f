use crate::core::constants::{CODE_LENGTH, SEPARATOR};
use crate::core::grid::{cell_bounds, cell_indices, cell_symbol, root_bounds, symbol_to_cell};
use crate::util::coord::round_coord;
use crate::util::error::DigipinError;
use geo_types::Rect;

/// Levels after which a display separator is inserted (XXX-XXX-XXXX).
const SEPARATOR_AFTER: [usize; 2] = [3, 6];

/// Regroups raw symbols into the canonical grouped display form.
fn group_symbols(symbols: &[char]) -> String {
    let mut code = String::with_capacity(CODE_LENGTH + SEPARATOR_AFTER.len());
    for (i, symbol) in symbols.iter().enumerate() {
        code.push(*symbol);
        if SEPARATOR_AFTER.contains(&(i + 1)) {
            code.push(SEPARATOR);
        }
    }
    code
}

/// Encodes a coordinate by recursive 4x4 subdivision of the root box.
///
/// Returns the grouped ten-symbol code together with the final level-10 cell
/// bounds. Inputs are normalized to six decimal places before subdivision;
/// non-finite or out-of-bounds coordinates yield `OutOfBound`.
pub(crate) fn encode_pass(lat: f64, lon: f64) -> Result<(String, Rect<f64>), DigipinError> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(DigipinError::OutOfBound);
    }

    let mut bounds = root_bounds();
    if lat < bounds.min().y || lat > bounds.max().y {
        return Err(DigipinError::OutOfBound);
    }
    if lon < bounds.min().x || lon > bounds.max().x {
        return Err(DigipinError::OutOfBound);
    }

    let lat = round_coord(lat);
    let lon = round_coord(lon);

    let mut symbols = Vec::with_capacity(CODE_LENGTH);
    for _ in 0..CODE_LENGTH {
        let (row, col) = cell_indices(lat, lon, &bounds);
        symbols.push(cell_symbol(row, col));
        bounds = cell_bounds(&bounds, row, col);
    }

    Ok((group_symbols(&symbols), bounds))
}

/// Decodes a code by replaying its symbols against the root box.
///
/// Separators are stripped first; anything other than exactly ten alphabet
/// symbols yields `InvalidCode`. Returns the canonical regrouped code and the
/// final cell bounds, from which both the centroid and the bounding box
/// accessors derive.
pub(crate) fn decode_pass(code: &str) -> Result<(String, Rect<f64>), DigipinError> {
    let symbols: Vec<char> = code.chars().filter(|c| *c != SEPARATOR).collect();
    if symbols.len() != CODE_LENGTH {
        return Err(DigipinError::InvalidCode);
    }

    let mut bounds = root_bounds();
    for symbol in &symbols {
        let (row, col) = symbol_to_cell(*symbol).ok_or(DigipinError::InvalidCode)?;
        bounds = cell_bounds(&bounds, row, col);
    }

    Ok((group_symbols(&symbols), bounds))
}
