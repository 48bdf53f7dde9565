use serde::{Deserialize, Serialize};

use crate::common::AuthorId;

/// The signed-in writer's editable identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Directory entry that authored posts point at
    pub author_id: AuthorId,
    pub display_name: String,
    pub suffix: String,
    pub bio: String,
    pub avatar_url: String,
    /// In follow order, without duplicates
    pub followed_authors: Vec<AuthorId>,
}

impl Profile {
    pub fn is_following(&self, author_id: AuthorId) -> bool {
        self.followed_authors.contains(&author_id)
    }
}
