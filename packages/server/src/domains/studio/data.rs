use juniper::{GraphQLInputObject, GraphQLObject};

use crate::common::AppState;
use crate::domains::posts::data::{gql_count, PostData};
use crate::domains::posts::models::Category;
use crate::domains::studio::editor::{DraftEdit, EditorSession};
use crate::domains::studio::readiness::{PublishReadiness, MIN_LIKES_TO_PUBLISH, MIN_WORDS_TO_PUBLISH};

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "Publish readiness checklist for a draft")]
pub struct PublishReadinessData {
    pub likes: i32,
    pub required_likes: i32,
    pub words: i32,
    pub required_words: i32,
    pub unresolved_reviews: i32,
    pub reading_time_minutes: i32,
    pub can_publish: bool,
    pub blockers: Vec<String>,
}

impl From<PublishReadiness> for PublishReadinessData {
    fn from(readiness: PublishReadiness) -> Self {
        Self {
            likes: gql_count(readiness.likes),
            required_likes: gql_count(MIN_LIKES_TO_PUBLISH),
            words: gql_count(readiness.words),
            required_words: gql_count(MIN_WORDS_TO_PUBLISH),
            unresolved_reviews: gql_count(readiness.unresolved_reviews),
            reading_time_minutes: gql_count(readiness.reading_time_minutes),
            can_publish: readiness.can_publish(),
            blockers: readiness.blockers(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "An open Author Studio editor")]
pub struct EditorSessionData {
    pub id: String,
    pub draft: PostData,
    pub is_new: bool,
    pub assist_in_progress: bool,
    pub readiness: PublishReadinessData,
}

impl EditorSessionData {
    pub fn from_session(session: &EditorSession, state: &AppState) -> Self {
        Self {
            id: session.id.to_string(),
            draft: PostData::from_post(&session.draft, state),
            is_new: session.is_new,
            assist_in_progress: session.assist_in_progress,
            readiness: session.readiness().into(),
        }
    }
}

/// Draft field changes; omitted fields are left as they are
#[derive(Debug, Clone, Default, GraphQLInputObject)]
pub struct UpdateDraftInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<Category>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub meta_description: Option<String>,
}

impl From<UpdateDraftInput> for DraftEdit {
    fn from(input: UpdateDraftInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
            excerpt: input.excerpt,
            category: input.category,
            image_url: input.image_url,
            featured: input.featured,
            meta_description: input.meta_description,
        }
    }
}
