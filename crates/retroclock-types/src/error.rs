use std::fmt;

/// Result type for retroclock-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Color name or hex string not present in the palette
    UnknownColor(String),

    /// Text that is neither `12h` nor `24h`
    InvalidFormat(String),

    /// Palette constructed without colors
    EmptyPalette,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownColor(name) => write!(f, "Unknown color: {}", name),
            Error::InvalidFormat(text) => {
                write!(f, "Invalid display format: {} (expected 12h or 24h)", text)
            }
            Error::EmptyPalette => write!(f, "Palette must contain at least one color"),
        }
    }
}

impl std::error::Error for Error {}
