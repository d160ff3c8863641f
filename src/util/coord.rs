use crate::core::constants::SCALE_FACTOR;
use geo_types::Point;

/// Trait for types that can provide x/y coordinates.
///
/// Implemented for `(f64, f64)` tuples and `geo_types::Point<f64>`.
/// The x-axis is longitude and the y-axis is latitude throughout the crate.
pub trait Coordinate {
    /// Returns the x-coordinate (longitude).
    fn x(&self) -> f64;
    /// Returns the y-coordinate (latitude).
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}

/// Rounds a coordinate to six decimal places, half away from zero.
///
/// Encoder inputs are normalized with this before subdivision so that
/// float-noise variants of the same coordinate always encode identically.
/// The decoder applies it only to the final centroid.
pub fn round_coord(value: f64) -> f64 {
    (value * SCALE_FACTOR as f64).round() / SCALE_FACTOR as f64
}
