use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::ReviewId;

/// Reviewer name used when the reader does not give one.
pub const DEFAULT_REVIEWER: &str = "Community Reviewer";

/// Reader feedback on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub comment: String,
    pub reviewer: String,
    pub resolved: bool,
    pub date: NaiveDate,
    pub author_response: Option<String>,
}

impl Review {
    pub fn new(comment: impl Into<String>, reviewer: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: ReviewId::new(),
            comment: comment.into(),
            reviewer: reviewer.into(),
            resolved: false,
            date,
            author_response: None,
        }
    }

    /// Flip the resolved flag. Resolved reviews can be reopened.
    pub fn toggle_resolved(&mut self) -> bool {
        self.resolved = !self.resolved;
        self.resolved
    }
}
