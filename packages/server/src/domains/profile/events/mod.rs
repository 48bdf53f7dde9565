use serde::Serialize;

use crate::common::AuthorId;

/// Profile domain events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileEvent {
    ProfileUpdated { author_id: AuthorId },
    AuthorFollowed { author_id: AuthorId },
    AuthorUnfollowed { author_id: AuthorId },
}
