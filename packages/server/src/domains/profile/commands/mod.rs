use serde::{Deserialize, Serialize};

use crate::common::AuthorId;

/// Profile domain commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProfileCommand {
    /// Replace the editable fields. Also renames the profile's directory entry.
    Update {
        display_name: String,
        suffix: String,
        bio: String,
        avatar_url: String,
    },

    /// No-op when already following
    Follow { author_id: AuthorId },

    Unfollow { author_id: AuthorId },
}
