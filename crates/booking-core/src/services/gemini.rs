//! Gemini provider.
//!
//! Calls the `generateContent` REST endpoint for both insight text and
//! guest-sheet extraction. Extraction asks for a JSON response constrained
//! by a schema and parses it into [`ExtractedBooking`] candidates.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{ExtractedBooking, ExtractionProvider, ImagePayload, InsightProvider, ProviderError};

/// Gemini API base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when the configuration names none.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the API key unless configured otherwise.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const EXTRACTION_PROMPT: &str = r#"Extract all booking details from this table image into a JSON list.
Ignore "S.NO" and "TAX".

Mapping rules:
- Guest Name -> name
- Contact No -> phone
- PAX -> totalPax (integer, represents total heads)
- Group Type -> Parse into a dictionary called "tickets".
  Examples:
  "1 couple 2stag" -> tickets: { "Couple": 1, "Stag": 2 }
  "Angels" -> tickets: { "Angels": 1 } (Note: Angels usually implies 2 pax)
  "couples" -> tickets: { "Couple": 1 }
- Advance -> amountPaid (number)
- Remarks -> use to find total value.
  "fully paid" means amountPaid = totalCost.
  "bal 2000 pending" means totalCost = amountPaid + 2000.

Return a JSON array of objects fitting this structure:
{ "name": string, "phone": string, "tickets": { "Stag"?: number, "Couple"?: number, "Angels"?: number }, "totalPax": number, "amountPaid": number, "totalCost": number, "amountPending": number }"#;

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Read the API key from the named environment variable.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotConfigured` when the variable is unset or blank.
    pub fn from_env(var: &str) -> Result<Self, ProviderError> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(ProviderError::NotConfigured(format!(
                "set {} to a Gemini API key",
                var
            ))),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Gemini client implementing both insight and extraction.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns `ProviderError::NotConfigured` if the API key is empty or the
    /// HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::NotConfigured(format!("HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            self.config.base_url, self.config.model, method, self.config.api_key
        )
    }

    async fn generate_content(&self, request: &GenerateContentRequest) -> Result<String, ProviderError> {
        tracing::debug!(
            model = %self.config.model,
            parts = request.contents.iter().map(|c| c.parts.len()).sum::<usize>(),
            "sending request to Gemini API"
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let text: String = body
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        tracing::debug!(chars = text.len(), "Gemini API responded");
        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl InsightProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt)],
            }],
            generation_config: None,
        };
        self.generate_content(&request).await
    }
}

#[async_trait]
impl ExtractionProvider for GeminiClient {
    async fn extract(&self, image: &ImagePayload) -> Result<Vec<ExtractedBooking>, ProviderError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::text(EXTRACTION_PROMPT),
                    Part::inline(&image.mime_type, image.to_base64()),
                ],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(extraction_schema()),
            }),
        };
        let text = self.generate_content(&request).await?;
        serde_json::from_str(text.trim())
            .map_err(|e| ProviderError::InvalidResponse(format!("extraction JSON: {}", e)))
    }
}

fn extraction_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "phone": { "type": "STRING" },
                "tickets": {
                    "type": "OBJECT",
                    "properties": {
                        "Stag": { "type": "INTEGER" },
                        "Couple": { "type": "INTEGER" },
                        "Angels": { "type": "INTEGER" }
                    }
                },
                "totalPax": { "type": "INTEGER" },
                "amountPaid": { "type": "NUMBER" },
                "totalCost": { "type": "NUMBER" },
                "amountPending": { "type": "NUMBER" }
            },
            "required": ["name", "phone", "tickets", "totalPax", "amountPaid", "totalCost", "amountPending"]
        }
    })
}

// Request/response wire types

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            ..Self::default()
        }
    }

    fn inline(mime_type: &str, data: String) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data,
            }),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
