pub mod pin;

pub use pin::{DigiPin, decode, encode};
