use serde::Serialize;

use crate::common::{PostId, ReviewId};
use crate::domains::posts::models::PostStatus;

/// Posts domain events
///
/// Immutable facts produced while applying a `PostCommand`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PostEvent {
    PostViewed { post_id: PostId, views: u64 },
    PostLiked { post_id: PostId, likes: u64 },
    ReviewAdded { post_id: PostId, review_id: ReviewId },
    ReviewResolutionToggled {
        post_id: PostId,
        review_id: ReviewId,
        resolved: bool,
    },
    ReviewResponded { post_id: PostId, review_id: ReviewId },
    PostSaved {
        post_id: PostId,
        status: PostStatus,
        /// False when an existing post was replaced
        created: bool,
    },
    /// The save moved the post into Published from any other state
    PostPublished { post_id: PostId },
    PostDeleted { post_id: PostId },
}
