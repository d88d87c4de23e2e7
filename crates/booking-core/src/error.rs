//! Error types for booking core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use std::fmt;

use thiserror::Error;

/// Result type alias for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

/// A required booking field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Phone => write!(f, "phone"),
        }
    }
}

/// Rejection reasons for a booking that fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field is empty
    #[error("Missing required field: {0}")]
    MissingField(Field),

    /// Every ticket quantity is zero
    #[error("No tickets selected")]
    NoTicketsSelected,

    /// A money amount does not fit the signed balance arithmetic
    #[error("Amount too large: {0} (maximum {max})", max = crate::builder::MAX_AMOUNT)]
    AmountTooLarge(u64),
}

/// Core error type for booking operations.
#[derive(Debug, Clone, Error)]
pub enum BookingError {
    /// Booking validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The ledger is full
    #[error("Capacity limit reached ({capacity} bookings)")]
    CapacityExceeded { capacity: usize },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insight or extraction service failure
    #[error("{0}")]
    ExternalService(String),
}

impl From<std::io::Error> for BookingError {
    fn from(err: std::io::Error) -> Self {
        BookingError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(err: serde_json::Error) -> Self {
        BookingError::Serialization(err.to_string())
    }
}
