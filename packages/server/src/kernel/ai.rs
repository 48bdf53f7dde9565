// AI implementation using the generateContent API
//
// This is the infrastructure implementation of BaseAI.
// Business logic (what to do with the text) lives in the assist domain.

use anyhow::{Context, Result};
use async_trait::async_trait;
use genai_client::{GenAIClient, GenerateRequest, GenerationConfig};

use super::BaseAI;
use crate::domains::assist::prompts::{refine_prompt, summarize_prompt};

/// Default text model
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Output cap for one-sentence summaries
const SUMMARY_MAX_OUTPUT_TOKENS: u32 = 100;

/// Low randomness: copy edits should be consistent, not creative
fn refine_config() -> GenerationConfig {
    GenerationConfig::default()
        .temperature(0.3)
        .top_p(0.8)
        .top_k(40)
}

fn summarize_config() -> GenerationConfig {
    GenerationConfig::default().max_output_tokens(SUMMARY_MAX_OUTPUT_TOKENS)
}

/// Gemini implementation of AI assist
#[derive(Clone)]
pub struct GeminiAI {
    client: GenAIClient,
    model: String,
}

impl GeminiAI {
    pub fn new(client: GenAIClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, operation: &str, prompt: String, config: GenerationConfig) -> Result<String> {
        tracing::info!(model = %self.model, operation, prompt_length = prompt.len(), "Calling generateContent");

        let response = self
            .client
            .generate(&self.model, GenerateRequest::prompt(prompt).config(config))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, operation, "AI assist call failed");
                e
            })
            .with_context(|| format!("AI {} request failed", operation))?;

        tracing::info!(
            model = %self.model,
            operation,
            response_length = response.text.len(),
            finish_reason = ?response.finish_reason,
            "AI assist response received"
        );

        Ok(response.text)
    }
}

#[async_trait]
impl BaseAI for GeminiAI {
    async fn refine(&self, title: &str, content: &str) -> Result<String> {
        self.generate("refine", refine_prompt(title, content), refine_config())
            .await
    }

    async fn summarize(&self, title: &str, content: &str) -> Result<String> {
        self.generate("summarize", summarize_prompt(title, content), summarize_config())
            .await
    }
}

/// Used when no API key is configured. Every call fails with a clear message.
#[derive(Debug, Clone, Default)]
pub struct DisabledAI;

#[async_trait]
impl BaseAI for DisabledAI {
    async fn refine(&self, _title: &str, _content: &str) -> Result<String> {
        anyhow::bail!("AI assist is not configured (set GEMINI_API_KEY)")
    }

    async fn summarize(&self, _title: &str, _content: &str) -> Result<String> {
        anyhow::bail!("AI assist is not configured (set GEMINI_API_KEY)")
    }

    fn is_configured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoding_parameters() {
        let refine = refine_config();
        assert_eq!(refine.temperature, Some(0.3));
        assert_eq!(refine.top_p, Some(0.8));
        assert_eq!(refine.top_k, Some(40));
        assert_eq!(refine.max_output_tokens, None);

        assert_eq!(summarize_config().max_output_tokens, Some(100));
    }

    #[tokio::test]
    async fn test_disabled_ai_fails() {
        let ai = DisabledAI;
        assert!(!ai.is_configured());
        assert!(ai.refine("t", "c").await.is_err());
        assert!(ai.summarize("t", "c").await.is_err());
    }
}
