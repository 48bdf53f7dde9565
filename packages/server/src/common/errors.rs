use thiserror::Error;

use super::{AuthorId, EditorSessionId, NotificationId, PostId, ReaderSessionId, ReviewId};

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors raised by state commands, editor sessions and the AI assist flow.
///
/// Every variant is handled at the point of the user action; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Review {review_id} not found on post {post_id}")]
    ReviewNotFound { post_id: PostId, review_id: ReviewId },

    #[error("Author not found: {0}")]
    AuthorNotFound(AuthorId),

    #[error("Notification not found: {0}")]
    NotificationNotFound(NotificationId),

    #[error("Editor session not found: {0}")]
    EditorSessionNotFound(EditorSessionId),

    #[error("Reader session not found: {0}")]
    ReaderSessionNotFound(ReaderSessionId),

    #[error("Please provide a {0} first")]
    MissingField(&'static str),

    #[error("Review comment cannot be empty")]
    EmptyReview,

    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    #[error("Post is not ready to publish: {0}")]
    PublishBlocked(String),

    #[error("An AI assist request is already running for this draft")]
    AssistInProgress,

    #[error("AI assist failed: {0}")]
    AssistFailed(String),
}

impl DomainError {
    /// Stable machine-readable code exposed to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::PostNotFound(_)
            | DomainError::ReviewNotFound { .. }
            | DomainError::AuthorNotFound(_)
            | DomainError::NotificationNotFound(_)
            | DomainError::EditorSessionNotFound(_)
            | DomainError::ReaderSessionNotFound(_) => "NOT_FOUND",
            DomainError::MissingField(_)
            | DomainError::EmptyReview
            | DomainError::InvalidAnnotation(_) => "VALIDATION",
            DomainError::PublishBlocked(_) => "PUBLISH_BLOCKED",
            DomainError::AssistInProgress => "ASSIST_IN_PROGRESS",
            DomainError::AssistFailed(_) => "ASSIST_FAILED",
        }
    }
}
