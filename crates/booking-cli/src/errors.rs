//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use booking_core::BookingError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug, Clone)]
pub enum CliError {
    /// Resource not found (config, store, booking)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// No room left in the ledger
    CapacityExceeded(String),

    /// Gemini call failed or is not configured
    ExternalService {
        message: String,
        hint: Option<String>,
    },

    /// The store could not be read or written
    Storage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an ExternalService error with a hint.
    pub fn external_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::ExternalService {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. }
            | CliError::InvalidInput { message, .. }
            | CliError::CapacityExceeded(message)
            | CliError::ExternalService { message, .. }
            | CliError::Storage(message) => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } | CliError::ExternalService { hint, .. } => {
                hint.as_deref()
            }
            CliError::CapacityExceeded(_) => {
                Some("Hint: Remove bookings with `bookings remove <id>` to free seats.")
            }
            CliError::Storage(_) => Some("Hint: Check that the store directory is writable."),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::CapacityExceeded(_) => exit_codes::CAPACITY_EXCEEDED,
            CliError::ExternalService { .. } => exit_codes::EXTERNAL_SERVICE,
            CliError::Storage(_) => exit_codes::FAILURE,
        }
    }
}

impl From<BookingError> for CliError {
    fn from(err: BookingError) -> Self {
        let message = err.to_string();
        match err {
            BookingError::Validation(_) | BookingError::InvalidInput(_) => {
                CliError::invalid_input(message)
            }
            BookingError::NotFound(_) => CliError::not_found(
                message,
                "Hint: Run `bookings list` to find booking IDs.",
            ),
            BookingError::CapacityExceeded { .. } => CliError::CapacityExceeded(message),
            BookingError::ExternalService(_) => CliError::ExternalService {
                message,
                hint: None,
            },
            BookingError::Storage(_) | BookingError::Serialization(_) => {
                CliError::Storage(message)
            }
        }
    }
}

/// Pull the typed error out of an anyhow chain, if there is one.
///
/// Core errors propagated with a bare `?` are mapped as well.
pub fn classify(err: &anyhow::Error) -> Option<CliError> {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return Some(cli.clone());
        }
        if let Some(core) = cause.downcast_ref::<BookingError>() {
            return Some(CliError::from(core.clone()));
        }
    }
    None
}
