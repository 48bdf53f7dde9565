use serde::Serialize;

use crate::common::utils::{reading_time_minutes, word_count};
use crate::domains::posts::models::Post;

pub const MIN_LIKES_TO_PUBLISH: u64 = 20;
pub const MIN_WORDS_TO_PUBLISH: usize = 300;

/// Whether a draft may move to Published.
///
/// Pure function of the editable state; recompute it whenever the draft
/// changes. Failing the gate blocks publishing only, never draft or review
/// saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PublishReadiness {
    pub likes: u64,
    pub words: usize,
    pub unresolved_reviews: usize,
    pub reading_time_minutes: usize,
}

impl PublishReadiness {
    pub fn evaluate(post: &Post) -> Self {
        Self::from_counts(
            post.likes,
            word_count(&post.content),
            post.unresolved_review_count(),
        )
    }

    pub fn from_counts(likes: u64, words: usize, unresolved_reviews: usize) -> Self {
        Self {
            likes,
            words,
            unresolved_reviews,
            reading_time_minutes: reading_time_minutes(words),
        }
    }

    pub fn has_enough_likes(&self) -> bool {
        self.likes >= MIN_LIKES_TO_PUBLISH
    }

    pub fn has_enough_words(&self) -> bool {
        self.words >= MIN_WORDS_TO_PUBLISH
    }

    pub fn reviews_resolved(&self) -> bool {
        self.unresolved_reviews == 0
    }

    pub fn can_publish(&self) -> bool {
        self.has_enough_likes() && self.has_enough_words() && self.reviews_resolved()
    }

    /// Human readable reasons the gate is closed; empty when it is open.
    pub fn blockers(&self) -> Vec<String> {
        let mut blockers = Vec::new();
        if !self.has_enough_likes() {
            blockers.push(format!(
                "needs at least {} likes (has {})",
                MIN_LIKES_TO_PUBLISH, self.likes
            ));
        }
        if !self.has_enough_words() {
            blockers.push(format!(
                "needs at least {} words (has {})",
                MIN_WORDS_TO_PUBLISH, self.words
            ));
        }
        if !self.reviews_resolved() {
            blockers.push(format!(
                "{} review(s) still unresolved",
                self.unresolved_reviews
            ));
        }
        blockers
    }
}
