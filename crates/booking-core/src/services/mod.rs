//! External AI services.
//!
//! The ledger never depends on these directly: insight and extraction are
//! opaque collaborators behind the [`InsightProvider`] and
//! [`ExtractionProvider`] traits. [`gemini::GeminiClient`] implements both
//! over the Gemini REST API; tests substitute their own providers.

pub mod extraction;
pub mod gemini;
pub mod insight;

use std::path::Path;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

use crate::error::{BookingError, Result};

pub use extraction::{extract_bookings, ExtractedBooking, ExtractionReport, EXTRACTION_FAILED};
pub use insight::{insights, summarize, BookingSummary, EMPTY_LEDGER_MESSAGE, INSIGHT_FALLBACK};

/// Error type for provider calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response")]
    EmptyResponse,
}

/// Free-text generation used for sales commentary.
#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ProviderError>;
}

/// Turns a photographed guest sheet into booking candidates.
#[async_trait]
pub trait ExtractionProvider: Send + Sync {
    async fn extract(
        &self,
        image: &ImagePayload,
    ) -> std::result::Result<Vec<ExtractedBooking>, ProviderError>;
}

/// An image handed to the extraction service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImagePayload {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Read an image file, inferring the MIME type from its extension.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` for unsupported extensions and
    /// `BookingError::Storage` if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let mime_type = match ext.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "webp" => "image/webp",
            "gif" => "image/gif",
            other => {
                return Err(BookingError::InvalidInput(format!(
                    "Unsupported image type: {:?} (use png, jpg, webp or gif)",
                    other
                )))
            }
        };
        let data = std::fs::read(path).map_err(|e| {
            BookingError::Storage(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(Self::new(mime_type, data))
    }

    /// Decode a `data:<mime>;base64,<payload>` URL or a bare base64 string
    /// (assumed PNG).
    ///
    /// # Errors
    ///
    /// Returns `BookingError::InvalidInput` if the payload is not valid base64.
    pub fn from_data_url(value: &str) -> Result<Self> {
        let (mime_type, encoded) = match value.split_once(',') {
            Some((header, payload)) => {
                let mime = header
                    .strip_prefix("data:")
                    .and_then(|h| h.split(';').next())
                    .filter(|m| !m.is_empty())
                    .unwrap_or("image/png");
                (mime.to_string(), payload)
            }
            None => ("image/png".to_string(), value),
        };
        let data = STANDARD
            .decode(encoded.trim())
            .map_err(|e| BookingError::InvalidInput(format!("Invalid base64 image: {}", e)))?;
        Ok(Self::new(mime_type, data))
    }

    /// Base64 form for inline request bodies.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }
}
