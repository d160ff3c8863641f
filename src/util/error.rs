/// Error type for digipin-rs operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigipinError {
    /// The input coordinate is non-finite or lies outside the supported bounds.
    OutOfBound,
    /// The code is not exactly ten grid symbols after separator removal,
    /// or contains a character outside the grid alphabet.
    InvalidCode,
}

impl std::fmt::Display for DigipinError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigipinError::OutOfBound => write!(f, "Coordinate out of bound"),
            DigipinError::InvalidCode => write!(f, "Invalid DIGIPIN"),
        }
    }
}

impl std::error::Error for DigipinError {}
