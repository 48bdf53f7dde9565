use crate::common::{AppState, DomainResult};
use crate::domains::feed::related_posts;
use crate::domains::posts::models::Post;
use crate::domains::reader::session::ReaderSession;

/// Everything the detail view renders for one post.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author_name: String,
    /// Whether the profile follows the post's author
    pub following: bool,
    pub unresolved_reviews: usize,
    pub related: Vec<Post>,
    pub has_liked: bool,
}

impl PostDetail {
    pub fn build(state: &AppState, session: &ReaderSession) -> DomainResult<Self> {
        let post = state.require_post(session.post_id)?;

        Ok(Self {
            author_name: state.author_name(post.author_id).to_string(),
            following: state.profile.is_following(post.author_id),
            unresolved_reviews: post.unresolved_review_count(),
            related: related_posts(&state.posts, post).into_iter().cloned().collect(),
            has_liked: session.has_liked,
            post: post.clone(),
        })
    }
}
