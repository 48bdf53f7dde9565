//! Pure REST client for `generateContent` text models
//!
//! A small client for hosted generative text models that speak the
//! `models/{model}:generateContent` protocol. No domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use genai_client::{GenAIClient, GenerateRequest, GenerationConfig};
//!
//! let client = GenAIClient::from_env()?;
//!
//! let response = client
//!     .generate(
//!         "gemini-3-flash-preview",
//!         GenerateRequest::prompt("Summarize this post")
//!             .config(GenerationConfig::default().max_output_tokens(100)),
//!     )
//!     .await?;
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{GenAIError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default public endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure generative text API client.
#[derive(Clone)]
pub struct GenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GenAIClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GenAIError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (proxies, regional endpoints, test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }

    /// Single text generation call.
    ///
    /// Returns the concatenated text of the first candidate. A response with no
    /// candidate text is reported as [`GenAIError::Empty`].
    pub async fn generate(&self, model: &str, request: GenerateRequest) -> Result<GenerateResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.generate_url(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, model, "generateContent request failed");
                GenAIError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, model, "generateContent API error");
            return Err(GenAIError::Api(format!("{}: {}", status, error_text)));
        }

        let raw: types::GenerateResponseRaw = response
            .json()
            .await
            .map_err(|e| GenAIError::Parse(e.to_string()))?;

        let parsed = parse_response(raw)?;

        debug!(
            model,
            duration_ms = start.elapsed().as_millis(),
            response_length = parsed.text.len(),
            "generateContent completed"
        );

        Ok(parsed)
    }
}

fn parse_response(raw: types::GenerateResponseRaw) -> Result<GenerateResponse> {
    let candidate = raw.candidates.into_iter().next().ok_or(GenAIError::Empty)?;
    let text = candidate
        .content
        .map(|c| c.text())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenAIError::Empty);
    }

    Ok(GenerateResponse {
        text,
        finish_reason: candidate.finish_reason,
        usage: raw.usage_metadata,
    })
}
