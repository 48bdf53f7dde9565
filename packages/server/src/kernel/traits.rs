// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only. What to do with the text (replacing
// content, setting the excerpt, the in-progress guard) lives in the assist
// domain.
//
// Naming convention: Base* for trait names (e.g., BaseAI)

use anyhow::Result;
use async_trait::async_trait;

// =============================================================================
// AI Trait (Infrastructure - text assist)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Copy-edit HTML content without changing its claims. Returns HTML.
    async fn refine(&self, title: &str, content: &str) -> Result<String>;

    /// One-sentence summary suitable for an excerpt
    async fn summarize(&self, title: &str, content: &str) -> Result<String>;

    /// Whether calls can succeed at all (false when no API key is configured)
    fn is_configured(&self) -> bool {
        true
    }
}
