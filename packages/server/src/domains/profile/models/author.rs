use serde::{Deserialize, Serialize};

use crate::common::AuthorId;

/// Entry of the author directory. Posts and follow lists refer to authors by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::new(),
            name: name.into(),
        }
    }
}
