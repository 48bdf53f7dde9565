use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use super::gql_count;
use crate::common::utils::{reading_time_minutes, word_count};
use crate::common::AppState;
use crate::domains::posts::models::{Category, FeedbackAnnotation, Post, PostStatus, Review};

/// API representation of a post
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "An article in any lifecycle status")]
pub struct PostData {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Sanitized HTML
    pub content: String,
    pub author_id: String,
    /// Display name resolved from the author directory
    pub author_name: String,
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub category: Category,
    pub status: PostStatus,
    pub image_url: String,
    pub views: i32,
    pub likes: i32,
    pub featured: bool,
    pub tags: Vec<String>,
    pub meta_description: String,
    pub reviews: Vec<ReviewData>,
    pub unresolved_review_count: i32,
    pub word_count: i32,
    pub reading_time_minutes: i32,
    pub annotations: Vec<AnnotationData>,
}

impl PostData {
    /// Build the view of `post`, resolving the author name against `state`.
    pub fn from_post(post: &Post, state: &AppState) -> Self {
        let words = word_count(&post.content);

        Self {
            id: post.id.to_string(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            author_id: post.author_id.to_string(),
            author_name: state.author_name(post.author_id).to_string(),
            date: post.date.to_string(),
            category: post.category,
            status: post.status,
            image_url: post.image_url.clone(),
            views: gql_count(post.views),
            likes: gql_count(post.likes),
            featured: post.featured,
            tags: post.tags.clone(),
            meta_description: post.meta_description.clone(),
            reviews: post.reviews.iter().map(ReviewData::from).collect(),
            unresolved_review_count: gql_count(post.unresolved_review_count()),
            word_count: gql_count(words),
            reading_time_minutes: gql_count(reading_time_minutes(words)),
            annotations: post.annotations.iter().map(AnnotationData::from).collect(),
        }
    }

    pub fn list(posts: &[Post], state: &AppState) -> Vec<Self> {
        posts.iter().map(|post| Self::from_post(post, state)).collect()
    }
}

/// Reader feedback on a post
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
pub struct ReviewData {
    pub id: String,
    pub comment: String,
    pub reviewer: String,
    pub resolved: bool,
    pub date: String,
    pub author_response: Option<String>,
}

impl From<&Review> for ReviewData {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            comment: review.comment.clone(),
            reviewer: review.reviewer.clone(),
            resolved: review.resolved,
            date: review.date.to_string(),
            author_response: review.author_response.clone(),
        }
    }
}

/// Inline range of the post text linked to a review
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
pub struct AnnotationData {
    pub review_id: String,
    /// Character offset into the text with markup removed
    pub start: i32,
    pub length: i32,
}

impl From<&FeedbackAnnotation> for AnnotationData {
    fn from(annotation: &FeedbackAnnotation) -> Self {
        Self {
            review_id: annotation.review_id.to_string(),
            start: gql_count(annotation.start),
            length: gql_count(annotation.len),
        }
    }
}
