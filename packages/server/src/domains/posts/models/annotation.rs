use serde::{Deserialize, Serialize};

use crate::common::ReviewId;

/// Inline range of a post's text linked to a review.
///
/// Offsets count characters of the content with markup removed, so they survive
/// re-rendering of the HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAnnotation {
    pub review_id: ReviewId,
    pub start: usize,
    pub len: usize,
}

impl FeedbackAnnotation {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}
