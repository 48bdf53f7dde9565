use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{FeedbackAnnotation, Review};
use crate::common::{AuthorId, DomainError, DomainResult, PostId, ReviewId};

/// A writable article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    /// Sanitized HTML
    pub content: String,
    pub author_id: AuthorId,
    pub date: NaiveDate,
    pub category: Category,
    pub status: PostStatus,
    pub image_url: String,
    pub views: u64,
    pub likes: u64,
    /// Newest first
    pub reviews: Vec<Review>,
    /// Only meaningful while published
    pub featured: bool,
    pub tags: Vec<String>,
    pub meta_description: String,
    /// Inline ranges of the content linked to reviews
    pub annotations: Vec<FeedbackAnnotation>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    pub fn unresolved_review_count(&self) -> usize {
        self.reviews.iter().filter(|r| !r.resolved).count()
    }

    pub fn review(&self, review_id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.id == review_id)
    }

    pub fn review_mut(&mut self, review_id: ReviewId) -> DomainResult<&mut Review> {
        let post_id = self.id;
        self.reviews
            .iter_mut()
            .find(|r| r.id == review_id)
            .ok_or(DomainError::ReviewNotFound { post_id, review_id })
    }

    /// True when at least one tag appears on both posts.
    pub fn shares_tag_with(&self, other: &Post) -> bool {
        self.tags.iter().any(|tag| other.tags.contains(tag))
    }

    /// Case-insensitive substring match against title, category and tags.
    ///
    /// `needle` must already be lowercased and trimmed; an empty needle matches.
    pub fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.category.label().to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }
}

// =============================================================================
// Enums
// =============================================================================

/// Lifecycle status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, juniper::GraphQLEnum)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Draft,
    Review,
    Published,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Review => write!(f, "review"),
            PostStatus::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "review" => Ok(PostStatus::Review),
            "published" => Ok(PostStatus::Published),
            _ => Err(anyhow::anyhow!("Invalid post status: {}", s)),
        }
    }
}

/// The fixed set of editorial categories
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, juniper::GraphQLEnum,
)]
pub enum Category {
    #[default]
    Cognitive,
    Developmental,
    Social,
    Clinical,
    Neuroscience,
    Wellness,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cognitive,
        Category::Developmental,
        Category::Social,
        Category::Clinical,
        Category::Neuroscience,
        Category::Wellness,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cognitive => "Cognitive",
            Category::Developmental => "Developmental",
            Category::Social => "Social",
            Category::Clinical => "Clinical",
            Category::Neuroscience => "Neuroscience",
            Category::Wellness => "Wellness",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::anyhow!("Invalid category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!("neuroscience".parse::<Category>().unwrap(), Category::Neuroscience);
        assert!("Astrology".parse::<Category>().is_err());
    }

    #[test]
    fn test_status_display_matches_parse() {
        for status in [PostStatus::Draft, PostStatus::Review, PostStatus::Published] {
            assert_eq!(status.to_string().parse::<PostStatus>().unwrap(), status);
        }
    }
}
