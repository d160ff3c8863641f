use crate::core::codec::{decode_pass, encode_pass};
use crate::util::coord::{Coordinate, round_coord};
use crate::util::error::DigipinError;
use geo_types::{Point, Rect};

/// A DIGIPIN cell: the ten-symbol code together with the grid cell it names.
#[derive(Debug, Clone, PartialEq)]
pub struct DigiPin {
    /// Grouped code, e.g. "39J-49L-L8T4".
    pub code: String,
    /// Cell centroid, rounded to six decimal places (x = longitude, y = latitude).
    pub center: Point<f64>,
    /// Unrounded bounding box of the level-10 cell.
    pub bounds: Rect<f64>,
}

impl DigiPin {
    fn new(code: String, bounds: Rect<f64>) -> Self {
        let center = bounds.center();
        Self {
            code,
            center: Point::new(round_coord(center.x), round_coord(center.y)),
            bounds,
        }
    }

    /// Encodes a coordinate into its DIGIPIN cell.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::DigiPin;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// let pin = DigiPin::from_lat_lon(28.622788, 77.213033)?;
    /// assert_eq!(pin.code, "39J-49L-L8T4");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_lat_lon(lat: f64, lon: f64) -> Result<Self, DigipinError> {
        let (code, bounds) = encode_pass(lat, lon)?;
        Ok(Self::new(code, bounds))
    }

    /// Decodes a code into its DIGIPIN cell.
    ///
    /// Accepts the code with or without separators; the stored `code` is
    /// always the canonical grouped form. The centroid and bounding box both
    /// come from the same decode pass.
    ///
    /// # Example
    /// ```
    /// use digipin_rs::DigiPin;
    ///
    /// # fn main() -> Result<(), digipin_rs::DigipinError> {
    /// let pin = DigiPin::from_code("39J-49L-L8T4")?;
    /// assert!((pin.latitude() - 28.622793).abs() < 1e-6);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_code(code: &str) -> Result<Self, DigipinError> {
        let (code, bounds) = decode_pass(code)?;
        Ok(Self::new(code, bounds))
    }

    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    pub fn longitude(&self) -> f64 {
        self.center.x()
    }
}

/// Encodes a coordinate (x = longitude, y = latitude) into a DIGIPIN code.
///
/// # Example
/// ```
/// use digipin_rs::encode;
///
/// let code = encode(&(77.213033, 28.622788)).unwrap();
/// assert_eq!(code, "39J-49L-L8T4");
/// ```
pub fn encode<C: Coordinate>(coord: &C) -> Result<String, DigipinError> {
    let (code, _) = encode_pass(coord.y(), coord.x())?;
    Ok(code)
}

/// Decodes a DIGIPIN code into the centroid of its cell
/// (x = longitude, y = latitude).
pub fn decode(code: &str) -> Result<Point<f64>, DigipinError> {
    Ok(DigiPin::from_code(code)?.center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lat_lon() -> Result<(), DigipinError> {
        let pin = DigiPin::from_lat_lon(20.0, 80.0)?;

        assert_eq!(pin.code, "48C-M4C-M4CM");
        assert!(pin.bounds.min().y <= pin.latitude());
        assert!(pin.latitude() <= pin.bounds.max().y);
        assert!(pin.bounds.min().x <= pin.longitude());
        assert!(pin.longitude() <= pin.bounds.max().x);
        Ok(())
    }

    #[test]
    fn test_from_code() -> Result<(), DigipinError> {
        let pin = DigiPin::from_code("F3M-P6T-FCJK")?;

        assert!(pin.latitude().is_finite());
        assert!(pin.longitude().is_finite());
        assert!((pin.latitude() - 34.043722).abs() < 1e-6);
        assert!((pin.longitude() - 66.726152).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_from_code_canonicalizes() -> Result<(), DigipinError> {
        let pin = DigiPin::from_code("F3MP6TFCJK")?;
        assert_eq!(pin.code, "F3M-P6T-FCJK");
        Ok(())
    }

    #[test]
    fn test_same_point_same_pin() -> Result<(), DigipinError> {
        // The same coordinate always returns the same pin.
        let pin1 = DigiPin::from_lat_lon(28.622788, 77.213033)?;
        let pin2 = DigiPin::from_lat_lon(28.622788, 77.213033)?;
        assert_eq!(pin1, pin2);

        // Sub-precision float noise is normalized away before subdivision.
        let pin3 = DigiPin::from_lat_lon(28.6227880000001, 77.2130330000001)?;
        assert_eq!(pin1.code, pin3.code);
        Ok(())
    }

    #[test]
    fn test_free_function_encode_accepts_tuple_and_point() -> Result<(), DigipinError> {
        let from_tuple = encode(&(77.213033, 28.622788))?;
        let from_point = encode(&Point::new(77.213033, 28.622788))?;
        assert_eq!(from_tuple, from_point);
        Ok(())
    }

    #[test]
    fn test_free_function_decode() -> Result<(), DigipinError> {
        let center = decode("39J-49L-L8T4")?;
        assert!((center.y() - 28.622793).abs() < 1e-6);
        assert!((center.x() - 77.213049).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_decode_rejects_invalid() {
        assert_eq!(decode("ABC"), Err(DigipinError::InvalidCode));
        assert_eq!(decode("123-456-WXYZ"), Err(DigipinError::InvalidCode));
    }
}
