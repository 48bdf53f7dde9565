use crate::common::AppState;
use crate::domains::posts::models::Post;
use crate::domains::profile::models::{Author, Profile};

/// What the profile page shows: the writer, their posts and who they follow.
#[derive(Debug, Clone)]
pub struct ProfilePage {
    pub profile: Profile,
    /// Posts authored by the profile's author id, in store order
    pub posts: Vec<Post>,
    pub total_views: u64,
    /// Followed authors still present in the directory, in follow order
    pub followed: Vec<Author>,
}

impl ProfilePage {
    pub fn build(state: &AppState) -> Self {
        let profile = state.profile.clone();
        let posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| p.author_id == profile.author_id)
            .cloned()
            .collect();
        let total_views = posts.iter().map(|p| p.views).sum();
        let followed = profile
            .followed_authors
            .iter()
            .filter_map(|id| state.author(*id).cloned())
            .collect();

        Self {
            profile,
            posts,
            total_views,
            followed,
        }
    }

    pub fn total_posts(&self) -> usize {
        self.posts.len()
    }
}
