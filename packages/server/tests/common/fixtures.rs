//! Content and id helpers for the seeded store.

use psyche_core::common::{AppState, PostId};
use psyche_core::domains::posts::PostStatus;

/// Seeded post titles, in store order.
pub const HABITS: &str = "The Neuroscience of Habit Formation";
pub const ATTACHMENT: &str = "Attachment Theory in Adult Relationships";
pub const RESILIENCE: &str = "The Psychology of Resilience";

/// A paragraph of exactly `n` words.
pub fn words(n: usize) -> String {
    format!("<p>{}</p>", vec!["insight"; n].join(" "))
}

/// Id of the seeded post with the given title.
pub fn post_id(state: &AppState, title: &str) -> PostId {
    state
        .posts
        .iter()
        .find(|p| p.title == title)
        .map(|p| p.id)
        .unwrap_or_else(|| panic!("no seeded post titled {:?}", title))
}

pub fn titles_with_status(state: &AppState, status: PostStatus) -> Vec<String> {
    state
        .posts
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.title.clone())
        .collect()
}
