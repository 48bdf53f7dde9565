use chrono::NaiveDate;
use uuid::Uuid;

use crate::common::utils::{plain_text, sanitize_html};
use crate::common::{DomainError, DomainResult, EditorSessionId, PostId, ReviewId};
use crate::domains::posts::models::{Category, FeedbackAnnotation, Post, PostStatus, Review};
use crate::domains::profile::models::Profile;
use crate::domains::studio::readiness::PublishReadiness;

/// Field changes to a draft. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct DraftEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<Category>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub meta_description: Option<String>,
}

/// An open editor in the Author Studio.
///
/// Holds an editable copy of a post. Nothing reaches the store until
/// [`EditorSession::prepare_save`] succeeds and the caller applies the save.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    pub id: EditorSessionId,
    pub draft: Post,
    /// False when editing a post that already exists in the store
    pub is_new: bool,
    /// Set while an AI assist call for this session is in flight
    pub assist_in_progress: bool,
}

impl EditorSession {
    /// Blank draft attributed to the profile's author.
    pub fn new_post(profile: &Profile, today: NaiveDate) -> Self {
        let draft = Post {
            id: PostId::new(),
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            author_id: profile.author_id,
            date: today,
            category: Category::default(),
            status: PostStatus::Draft,
            image_url: format!("https://picsum.photos/seed/{}/800/400", Uuid::new_v4()),
            views: 0,
            likes: 0,
            reviews: Vec::new(),
            featured: false,
            tags: Vec::new(),
            meta_description: String::new(),
            annotations: Vec::new(),
        };

        Self {
            id: EditorSessionId::new(),
            draft,
            is_new: true,
            assist_in_progress: false,
        }
    }

    pub fn edit(post: &Post) -> Self {
        Self {
            id: EditorSessionId::new(),
            draft: post.clone(),
            is_new: false,
            assist_in_progress: false,
        }
    }

    pub fn apply_edit(&mut self, edit: DraftEdit) {
        if let Some(title) = edit.title {
            self.draft.title = title;
        }
        if let Some(content) = edit.content {
            self.draft.content = content;
            self.drop_stale_annotations();
        }
        if let Some(excerpt) = edit.excerpt {
            self.draft.excerpt = excerpt;
        }
        if let Some(category) = edit.category {
            self.draft.category = category;
        }
        if let Some(image_url) = edit.image_url {
            self.draft.image_url = image_url;
        }
        if let Some(featured) = edit.featured {
            self.draft.featured = featured;
        }
        if let Some(meta_description) = edit.meta_description {
            self.draft.meta_description = meta_description;
        }
    }

    /// Add a trimmed tag. Empty and duplicate tags are ignored.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.draft.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.draft.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.draft.tags.len();
        self.draft.tags.retain(|t| t != tag);
        self.draft.tags.len() != before
    }

    /// Link a range of the draft's text to a review.
    ///
    /// Offsets count characters of the content with markup removed. A review
    /// holds at most one annotation; annotating again moves it.
    pub fn annotate(
        &mut self,
        review_id: ReviewId,
        start: usize,
        len: usize,
    ) -> DomainResult<FeedbackAnnotation> {
        if self.draft.review(review_id).is_none() {
            return Err(DomainError::ReviewNotFound {
                post_id: self.draft.id,
                review_id,
            });
        }
        if len == 0 {
            return Err(DomainError::InvalidAnnotation(
                "range must not be empty".to_string(),
            ));
        }

        let text_len = self.text_len();
        match start.checked_add(len) {
            Some(end) if end <= text_len => {}
            _ => {
                return Err(DomainError::InvalidAnnotation(format!(
                    "range starting at {} with length {} is outside the text ({} characters)",
                    start, len, text_len
                )))
            }
        }

        let annotation = FeedbackAnnotation {
            review_id,
            start,
            len,
        };
        self.draft.annotations.retain(|a| a.review_id != review_id);
        self.draft.annotations.push(annotation);
        Ok(annotation)
    }

    /// Where the review's annotation sits in the text ("jump to source").
    pub fn locate(&self, review_id: ReviewId) -> Option<FeedbackAnnotation> {
        self.draft
            .annotations
            .iter()
            .find(|a| a.review_id == review_id)
            .copied()
    }

    pub fn readiness(&self) -> PublishReadiness {
        PublishReadiness::evaluate(&self.draft)
    }

    /// The post to store for a save with `status`.
    ///
    /// Title and content are required for every status; content counts only
    /// if text survives sanitizing. Publishing also requires the readiness
    /// gate to be open.
    pub fn prepare_save(&self, status: PostStatus) -> DomainResult<Post> {
        if self.draft.title.trim().is_empty() {
            return Err(DomainError::MissingField("title"));
        }
        let content = sanitize_html(&self.draft.content);
        if plain_text(&content).trim().is_empty() {
            return Err(DomainError::MissingField("content"));
        }

        if status == PostStatus::Published {
            let readiness = self.readiness();
            if !readiness.can_publish() {
                return Err(DomainError::PublishBlocked(readiness.blockers().join("; ")));
            }
        }

        let mut post = self.draft.clone();
        post.content = content;
        post.status = status;
        Ok(post)
    }

    /// Replace the content with refined text. Annotations no longer line up
    /// with the new text and are dropped.
    pub fn accept_refined_content(&mut self, content: &str) {
        self.draft.content = sanitize_html(content);
        self.draft.annotations.clear();
    }

    pub fn accept_excerpt(&mut self, excerpt: &str) {
        self.draft.excerpt = excerpt.trim().to_string();
    }

    /// Mirror the stored post's reviews into the draft after a review panel
    /// action went through the store.
    pub fn sync_reviews(&mut self, reviews: &[Review]) {
        self.draft.reviews = reviews.to_vec();
        let draft = &self.draft;
        let kept: Vec<FeedbackAnnotation> = draft
            .annotations
            .iter()
            .filter(|a| draft.review(a.review_id).is_some())
            .copied()
            .collect();
        self.draft.annotations = kept;
    }

    fn text_len(&self) -> usize {
        plain_text(&self.draft.content).chars().count()
    }

    fn drop_stale_annotations(&mut self) {
        let text_len = self.text_len();
        self.draft.annotations.retain(|a| a.end() <= text_len);
    }
}
