//! Error types for RREF operations

/// Errors that can occur while decoding or reducing a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RrefError {
    /// Payload missing or not a sequence of numeric rows
    InvalidInput,
    /// Matrix is empty or its rows differ in length
    InvalidShape,
    /// Elimination produced a non-finite value
    InternalError,
}

/// Which side of a request an error is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller sent something unusable
    Client,
    /// The reduction itself failed
    Server,
}

impl RrefError {
    /// Classify the error for transport layers
    pub const fn category(self) -> ErrorCategory {
        match self {
            RrefError::InvalidInput | RrefError::InvalidShape => ErrorCategory::Client,
            RrefError::InternalError => ErrorCategory::Server,
        }
    }
}

impl core::fmt::Display for RrefError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            RrefError::InvalidInput => "Matrix must be a 2D array",
            RrefError::InvalidShape => "Matrix must be non-empty and rectangular",
            RrefError::InternalError => "An unknown error occurred.",
        };
        write!(f, "{msg}")
    }
}

/// Result type for RREF operations
pub type Result<T> = core::result::Result<T, RrefError>;
