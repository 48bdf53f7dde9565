use serde::{Deserialize, Serialize};

use crate::domains::posts::models::{Post, PostStatus};
use crate::domains::profile::models::Profile;

/// Reader feed tabs
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, juniper::GraphQLEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FeedTab {
    #[default]
    Published,
    Review,
    /// Published posts by followed authors
    Following,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pub tab: FeedTab,
    /// Free text; surrounding whitespace is ignored
    pub query: String,
}

impl FeedQuery {
    pub fn new(tab: FeedTab, query: impl Into<String>) -> Self {
        Self {
            tab,
            query: query.into(),
        }
    }

    /// Lowercased, trimmed search needle
    pub fn needle(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn is_searching(&self) -> bool {
        !self.query.trim().is_empty()
    }

    fn matches_tab(&self, post: &Post, profile: &Profile) -> bool {
        match self.tab {
            FeedTab::Published => post.status == PostStatus::Published,
            FeedTab::Review => post.status == PostStatus::Review,
            FeedTab::Following => post.is_published() && profile.is_following(post.author_id),
        }
    }
}

/// The reader's page: optional hero post plus the card grid.
#[derive(Debug, Clone)]
pub struct FeedView {
    pub featured: Option<Post>,
    pub posts: Vec<Post>,
    pub searching: bool,
}

impl FeedView {
    /// Build the page for `query`. The hero only appears on the published tab
    /// while not searching.
    pub fn build(posts: &[Post], profile: &Profile, query: &FeedQuery) -> Self {
        let searching = query.is_searching();
        let featured = if query.tab == FeedTab::Published && !searching {
            featured_post(posts).cloned()
        } else {
            None
        };

        Self {
            featured,
            posts: filter_feed(posts, profile, query),
            searching,
        }
    }

    pub fn result_count(&self) -> usize {
        self.posts.len()
    }
}

/// The single published post flagged as featured. First in store order wins.
pub fn featured_post(posts: &[Post]) -> Option<&Post> {
    posts.iter().find(|p| p.is_published() && p.featured)
}

/// Filter the store for a feed tab and search query, keeping store order.
///
/// The featured post is left out of the grid while not searching because it
/// is shown in the hero section; search results include it like any other post.
pub fn filter_feed(posts: &[Post], profile: &Profile, query: &FeedQuery) -> Vec<Post> {
    let needle = query.needle();
    let searching = query.is_searching();
    let featured_id = featured_post(posts).map(|p| p.id);

    posts
        .iter()
        .filter(|post| query.matches_tab(post, profile))
        .filter(|post| post.matches_search(&needle))
        .filter(|post| searching || Some(post.id) != featured_id)
        .cloned()
        .collect()
}
