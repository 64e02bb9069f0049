//! Error types for dynamic bit vector operations.

use thiserror::Error;

/// Error variants for dynamic bit vector operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index was provided that is out of the structure's bounds.
    #[error("index out of range: {0}")]
    IndexOutOfRange(usize),

    /// An insertion was attempted on a vector already holding `capacity` bits.
    #[error("capacity exceeded")]
    CapacityExceeded,

    /// The requested capacity yields field widths that do not fit in a word.
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(&'static str),
}

/// A specialized Result type for dynamic bit vector operations.
pub type Result<T> = std::result::Result<T, Error>;
