use chrono::NaiveDate;
use tracing::info;

use crate::common::utils::{fallback_excerpt, plain_text, sanitize_html};
use crate::common::{AppEvent, AppState, DomainError, DomainResult, PostId};
use crate::domains::notifications::actions::announce_publication;
use crate::domains::posts::events::PostEvent;
use crate::domains::posts::models::{Post, PostStatus};

/// Validate and normalize a post before it is stored.
///
/// Title and content are required. Content is sanitized first and must still
/// carry text afterwards. An empty excerpt is filled from the content.
pub fn prepare_for_save(mut post: Post) -> DomainResult<Post> {
    if post.title.trim().is_empty() {
        return Err(DomainError::MissingField("title"));
    }

    post.content = sanitize_html(&post.content);
    if plain_text(&post.content).trim().is_empty() {
        return Err(DomainError::MissingField("content"));
    }

    if post.excerpt.trim().is_empty() {
        post.excerpt = fallback_excerpt(&post.content);
    }

    Ok(post)
}

/// Upsert a post by id.
///
/// Existing posts are replaced in place; new posts are prepended. A save that
/// moves the post into Published from any other state (or creates it as
/// Published) prepends a notification. Re-saving a published post does not.
pub fn save_post(state: &mut AppState, post: Post, today: NaiveDate) -> DomainResult<Vec<AppEvent>> {
    let post = prepare_for_save(post)?;
    if state.author(post.author_id).is_none() {
        return Err(DomainError::AuthorNotFound(post.author_id));
    }

    let post_id = post.id;
    let status = post.status;
    let previous_status = state.post(post_id).map(|existing| existing.status);
    let newly_published =
        status == PostStatus::Published && previous_status != Some(PostStatus::Published);

    let mut events: Vec<AppEvent> = vec![PostEvent::PostSaved {
        post_id,
        status,
        created: previous_status.is_none(),
    }
    .into()];

    if newly_published {
        info!(post_id = %post_id, title = %post.title, "Post published");
        events.push(PostEvent::PostPublished { post_id }.into());
        let author_name = state.author_name(post.author_id).to_string();
        events.push(announce_publication(state, &author_name, &post.title, today));
    }

    match state.posts.iter_mut().find(|p| p.id == post_id) {
        Some(existing) => *existing = post,
        None => state.posts.insert(0, post),
    }

    Ok(events)
}

/// Remove a post by id.
pub fn delete_post(state: &mut AppState, post_id: PostId) -> DomainResult<Vec<AppEvent>> {
    let index = state
        .posts
        .iter()
        .position(|p| p.id == post_id)
        .ok_or(DomainError::PostNotFound(post_id))?;
    state.posts.remove(index);

    Ok(vec![PostEvent::PostDeleted { post_id }.into()])
}
