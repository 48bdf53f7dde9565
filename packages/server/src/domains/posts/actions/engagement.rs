use crate::common::{AppEvent, AppState, DomainResult, PostId};
use crate::domains::posts::events::PostEvent;

/// Count a selection of the post. Not deduplicated.
pub fn view_post(state: &mut AppState, post_id: PostId) -> DomainResult<Vec<AppEvent>> {
    let post = state.post_mut(post_id)?;
    post.views += 1;

    Ok(vec![PostEvent::PostViewed {
        post_id,
        views: post.views,
    }
    .into()])
}

pub fn like_post(state: &mut AppState, post_id: PostId) -> DomainResult<Vec<AppEvent>> {
    let post = state.post_mut(post_id)?;
    post.likes += 1;

    Ok(vec![PostEvent::PostLiked {
        post_id,
        likes: post.likes,
    }
    .into()])
}
