pub mod codec;
pub mod constants;
pub mod grid;

pub use constants::{CODE_LENGTH, DIGIPIN_GRID, GRID_EXTENTS, SEPARATOR};
pub use grid::{root_bounds, symbol_to_cell};
