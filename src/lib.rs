//! # digipin-rs
//!
//! Encodes a latitude/longitude into a DIGIPIN code and decodes a code back
//! into a coordinate or bounding box. A code is ten symbols from a fixed 4x4
//! alphabet, one per level of recursive 4x4 subdivision of the fixed outer
//! box covering the Indian region, displayed grouped as `XXX-XXX-XXXX`.
//!
//! There are two main entry points.
//!
//! ### 1. `DigiPin` - Code plus Cell Geometry
//!
//! ```
//! use digipin_rs::DigiPin;
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let pin = DigiPin::from_lat_lon(28.622788, 77.213033)?;
//! println!("{}", pin.code);
//!
//! let restored = DigiPin::from_code(&pin.code)?;
//! assert_eq!(pin.code, restored.code);
//! println!("cell: {:?}", restored.bounds);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `encode` / `decode` - Free Functions
//!
//! ```
//! use digipin_rs::{decode, encode};
//! use geo_types::point;
//!
//! # fn main() -> Result<(), digipin_rs::DigipinError> {
//! let pt = point! { x: 77.213033, y: 28.622788 };
//! let code = encode(&pt)?;
//! let center = decode(&code)?;
//! assert!((center.y() - 28.622788).abs() < 0.001);
//! # Ok(())
//! # }
//! ```
//!
//! Out-of-bounds coordinates and malformed codes are reported through the
//! [`DigipinError`] variants rather than panics, so callers branch on the
//! two failure kinds directly.

pub mod api;
pub mod core;
pub mod util;

pub use api::{DigiPin, decode, encode};
pub use self::core::{
    CODE_LENGTH, DIGIPIN_GRID, GRID_EXTENTS, SEPARATOR, root_bounds, symbol_to_cell,
};
pub use util::{Coordinate, DigipinError, round_coord};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_code_shape(code: &str) {
        let groups: Vec<&str> = code.split('-').collect();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].len(), 3);
        assert_eq!(groups[1].len(), 3);
        assert_eq!(groups[2].len(), 4);
        for group in groups {
            for symbol in group.chars() {
                assert!(symbol_to_cell(symbol).is_some(), "foreign symbol {symbol}");
            }
        }
    }

    #[test]
    fn test_encode_shape_across_the_grid() -> Result<(), DigipinError> {
        for lat in [2.5, 5.0, 10.0, 15.25, 20.0, 25.7, 30.0, 35.0, 38.49] {
            for lon in [63.5, 65.0, 70.1, 75.0, 80.0, 85.33, 90.0, 95.0, 99.49] {
                let code = encode(&(lon, lat))?;
                assert_code_shape(&code);
            }
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_approximate() -> Result<(), DigipinError> {
        for lat in [2.5, 5.0, 10.0, 15.25, 20.0, 25.7, 30.0, 35.0, 38.49] {
            for lon in [63.5, 65.0, 70.1, 75.0, 80.0, 85.33, 90.0, 95.0, 99.49] {
                let code = encode(&(lon, lat))?;
                let center = decode(&code)?;
                // A level-10 cell is ~3.4e-5 degrees across; 0.1 is the
                // documented tolerance.
                assert!((center.y() - lat).abs() < 0.1);
                assert!((center.x() - lon).abs() < 0.1);
            }
        }
        Ok(())
    }

    #[test]
    fn test_round_trip_exact_from_code() -> Result<(), DigipinError> {
        // Re-encoding a decoded centroid reproduces the code exactly: the
        // centroid lands back in the cell it was decoded from.
        for code in [
            "F3M-P6T-FCJK",
            "39J-49L-L8T4",
            "888-888-8888",
            "FFF-FFF-FFFF",
            "LLL-LLL-LLLL",
            "TTT-TTT-TTTT",
            "222-222-2222",
        ] {
            let pin = DigiPin::from_code(code)?;
            assert_eq!(encode(&pin.center)?, code);
        }
        Ok(())
    }

    #[test]
    fn test_centroid_and_bounds_are_consistent() -> Result<(), DigipinError> {
        let pin = DigiPin::from_code("39J-49L-L8T4")?;
        let center = pin.bounds.center();
        assert_eq!(pin.latitude(), round_coord(center.y));
        assert_eq!(pin.longitude(), round_coord(center.x));
        Ok(())
    }

    #[test]
    fn test_root_bounds_extents() {
        let bounds = root_bounds();
        assert_eq!(bounds.min().y, 2.5);
        assert_eq!(bounds.max().y, 38.5);
        assert_eq!(bounds.min().x, 63.5);
        assert_eq!(bounds.max().x, 99.5);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(encode(&(80.0, 1.0)), Err(DigipinError::OutOfBound));
        assert_eq!(encode(&(80.0, 40.0)), Err(DigipinError::OutOfBound));
        assert_eq!(encode(&(60.0, 20.0)), Err(DigipinError::OutOfBound));
        assert_eq!(encode(&(100.0, 20.0)), Err(DigipinError::OutOfBound));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DigipinError::OutOfBound.to_string(), "Coordinate out of bound");
        assert_eq!(DigipinError::InvalidCode.to_string(), "Invalid DIGIPIN");
    }
}
