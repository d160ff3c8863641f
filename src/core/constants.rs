/// The 4x4 DIGIPIN symbol grid.
///
/// Row 0 is the northmost latitude band, column 0 the westmost longitude band.
pub const DIGIPIN_GRID: [[char; 4]; 4] = [
    ['F', 'C', '9', '8'],
    ['J', '3', '2', '7'],
    ['K', '4', '5', '6'],
    ['L', 'M', 'P', 'T'],
];

/// Grid extents [min_lon, min_lat, max_lon, max_lat]
pub const GRID_EXTENTS: [f64; 4] = [63.5, 2.5, 99.5, 38.5];

/// Number of subdivision levels, and of symbols in a code
pub const CODE_LENGTH: usize = 10;

/// Display separator inserted after the 3rd and 6th symbol
pub const SEPARATOR: char = '-';

/// Scale factor to preserve six decimal places
pub(crate) const SCALE_FACTOR: u64 = 1_000_000;

/// ASCII reverse lookup from grid symbol to (row, col).
///
/// Built once from `DIGIPIN_GRID` at compile time; shared read-only by every
/// decode call.
pub(crate) const SYMBOL_CELLS: [Option<(u8, u8)>; 128] = build_symbol_cells();

const fn build_symbol_cells() -> [Option<(u8, u8)>; 128] {
    let mut table = [None; 128];
    let mut row = 0;
    while row < 4 {
        let mut col = 0;
        while col < 4 {
            table[DIGIPIN_GRID[row][col] as usize] = Some((row as u8, col as u8));
            col += 1;
        }
        row += 1;
    }
    table
}
