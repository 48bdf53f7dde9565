use serde::{Deserialize, Serialize};

use crate::common::{PostId, ReviewId};
use crate::domains::posts::models::Post;

/// Post store commands
///
/// Every variant is applied to a snapshot through `AppState::apply`; none of
/// them performs IO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PostCommand {
    /// Reader selected the post. Every selection counts.
    View { post_id: PostId },

    /// Increment likes. The once-per-session guard lives in the reader session.
    Like { post_id: PostId },

    /// Prepend an unresolved review
    AddReview {
        post_id: PostId,
        comment: String,
        /// Defaults to the community reviewer name when absent or blank
        reviewer: Option<String>,
    },

    /// Flip a review's resolved flag
    ToggleReviewResolved { post_id: PostId, review_id: ReviewId },

    /// Set or overwrite the author's response on a review
    RespondToReview {
        post_id: PostId,
        review_id: ReviewId,
        response: String,
    },

    /// Upsert by id
    Save { post: Box<Post> },

    /// Remove by id. Notifications about the post are kept.
    Delete { post_id: PostId },
}
