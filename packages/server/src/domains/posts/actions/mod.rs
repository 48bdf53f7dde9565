//! Posts domain actions - pure state transitions
//!
//! Each action mutates the working copy of an `AppState` handed in by
//! `AppState::apply` and returns the fact events it produced. An error leaves
//! the caller's original snapshot untouched because the copy is discarded.

mod engagement;
mod reviews;
mod save;

use chrono::NaiveDate;
use tracing::debug;

use crate::common::{AppEvent, AppState, DomainResult};
use crate::domains::posts::commands::PostCommand;

pub use engagement::{like_post, view_post};
pub use reviews::{add_review, respond_to_review, toggle_review_resolved};
pub use save::{delete_post, prepare_for_save, save_post};

/// Dispatch a post command onto the working state.
pub fn apply(
    state: &mut AppState,
    command: PostCommand,
    today: NaiveDate,
) -> DomainResult<Vec<AppEvent>> {
    debug!(?command, "Applying post command");

    match command {
        PostCommand::View { post_id } => view_post(state, post_id),
        PostCommand::Like { post_id } => like_post(state, post_id),
        PostCommand::AddReview {
            post_id,
            comment,
            reviewer,
        } => add_review(state, post_id, &comment, reviewer.as_deref(), today),
        PostCommand::ToggleReviewResolved { post_id, review_id } => {
            toggle_review_resolved(state, post_id, review_id)
        }
        PostCommand::RespondToReview {
            post_id,
            review_id,
            response,
        } => respond_to_review(state, post_id, review_id, response),
        PostCommand::Save { post } => save_post(state, *post, today),
        PostCommand::Delete { post_id } => delete_post(state, post_id),
    }
}
