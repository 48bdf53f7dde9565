//! AI assist actions for open editor sessions
//!
//! One attempt per request, no retry. The editor's content only changes when
//! the model returns usable text; any failure is reported and leaves the draft
//! as it was.

use tracing::{info, warn};

use crate::common::utils::{plain_text, sanitize_html};
use crate::common::{DomainError, DomainResult, EditorSessionId};
use crate::domains::studio::EditorSession;
use crate::kernel::AppController;

/// Copy-edit the draft's content and replace it with the sanitized result.
pub async fn refine_content(
    controller: &AppController,
    session_id: EditorSessionId,
) -> DomainResult<EditorSession> {
    let (title, content) = controller.begin_assist(session_id).await?;
    info!(session_id = %session_id, content_length = content.len(), "Refining draft content");

    // Judge the text that would actually be stored
    let result = controller
        .deps()
        .ai
        .refine(&title, &content)
        .await
        .map(|text| sanitize_html(&text));
    match usable_text(result) {
        Ok(refined) => {
            controller
                .finish_assist(session_id, |session| session.accept_refined_content(&refined))
                .await
        }
        Err(error) => fail(controller, session_id, error).await,
    }
}

/// Generate a one-sentence excerpt for the draft.
pub async fn generate_excerpt(
    controller: &AppController,
    session_id: EditorSessionId,
) -> DomainResult<EditorSession> {
    let (title, content) = controller.begin_assist(session_id).await?;
    info!(session_id = %session_id, "Generating excerpt");

    let result = controller.deps().ai.summarize(&title, &content).await;
    match usable_text(result) {
        Ok(excerpt) => {
            controller
                .finish_assist(session_id, |session| session.accept_excerpt(&excerpt))
                .await
        }
        Err(error) => fail(controller, session_id, error).await,
    }
}

fn usable_text(result: anyhow::Result<String>) -> Result<String, DomainError> {
    match result {
        Ok(text) if plain_text(&text).trim().is_empty() => Err(DomainError::AssistFailed(
            "the model returned no text".to_string(),
        )),
        Ok(text) => Ok(text),
        Err(e) => Err(DomainError::AssistFailed(format!("{:#}", e))),
    }
}

/// Clear the in-progress flag without touching the draft, then report.
async fn fail(
    controller: &AppController,
    session_id: EditorSessionId,
    error: DomainError,
) -> DomainResult<EditorSession> {
    warn!(session_id = %session_id, error = %error, "AI assist failed");
    controller.finish_assist(session_id, |_| {}).await?;
    Err(error)
}
