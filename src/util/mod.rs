pub mod coord;
pub mod error;

pub use coord::{Coordinate, round_coord};
pub use error::DigipinError;
