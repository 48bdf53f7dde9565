use chrono::NaiveDate;

use crate::common::{AppEvent, AppState, DomainError, DomainResult, PostId, ReviewId};
use crate::domains::posts::events::PostEvent;
use crate::domains::posts::models::{Review, DEFAULT_REVIEWER};

/// Prepend a new unresolved review dated `today`.
pub fn add_review(
    state: &mut AppState,
    post_id: PostId,
    comment: &str,
    reviewer: Option<&str>,
    today: NaiveDate,
) -> DomainResult<Vec<AppEvent>> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(DomainError::EmptyReview);
    }

    let reviewer = reviewer
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_REVIEWER);

    let post = state.post_mut(post_id)?;
    let review = Review::new(comment, reviewer, today);
    let review_id = review.id;
    post.reviews.insert(0, review);

    Ok(vec![PostEvent::ReviewAdded { post_id, review_id }.into()])
}

/// Flip the resolved flag. Calling twice restores the original value.
pub fn toggle_review_resolved(
    state: &mut AppState,
    post_id: PostId,
    review_id: ReviewId,
) -> DomainResult<Vec<AppEvent>> {
    let resolved = state.post_mut(post_id)?.review_mut(review_id)?.toggle_resolved();

    Ok(vec![PostEvent::ReviewResolutionToggled {
        post_id,
        review_id,
        resolved,
    }
    .into()])
}

/// Set or overwrite the author's response text.
pub fn respond_to_review(
    state: &mut AppState,
    post_id: PostId,
    review_id: ReviewId,
    response: String,
) -> DomainResult<Vec<AppEvent>> {
    let review = state.post_mut(post_id)?.review_mut(review_id)?;
    review.author_response = Some(response);

    Ok(vec![PostEvent::ReviewResponded { post_id, review_id }.into()])
}
