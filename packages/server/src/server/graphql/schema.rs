//! GraphQL schema definition.

use super::context::GraphQLContext;
use super::errors::field_error;
use juniper::{EmptySubscription, FieldResult, RootNode};
use tracing::info;
use uuid::Uuid;

// Common types
use crate::common::{
    AppState, AuthorId, DomainError, EditorSessionId, NotificationId, PostId, ReaderSessionId,
    ReviewId, Transition,
};

// Domain actions
use crate::domains::assist::actions as assist_actions;
use crate::domains::notifications::actions::unread_count;

// Domain data types (GraphQL types)
use crate::domains::feed::data::FeedData;
use crate::domains::notifications::data::NotificationData;
use crate::domains::posts::data::{gql_count, PostData};
use crate::domains::profile::data::{AuthorData, ProfileData, ProfilePageData, UpdateProfileInput};
use crate::domains::reader::data::PostDetailData;
use crate::domains::studio::data::{EditorSessionData, PublishReadinessData, UpdateDraftInput};

// Domain models and commands
use crate::domains::feed::{related_posts, FeedQuery, FeedTab, FeedView};
use crate::domains::notifications::NotificationCommand;
use crate::domains::posts::{Category, PostCommand, PostStatus};
use crate::domains::profile::{ProfileCommand, ProfilePage};
use crate::domains::reader::{PostDetail, ReaderSession};
use crate::domains::studio::EditorSession;

/// View of a post in the snapshot a command produced.
fn post_in(transition: &Transition, post_id: PostId) -> FieldResult<PostData> {
    let post = transition.state.require_post(post_id).map_err(field_error)?;
    Ok(PostData::from_post(post, &transition.state))
}

fn detail_data(session: &ReaderSession, detail: &PostDetail, state: &AppState) -> PostDetailData {
    PostDetailData::from_detail(session.id.to_string(), detail, state)
}

async fn editor_data(ctx: &GraphQLContext, session: &EditorSession) -> EditorSessionData {
    ctx.controller
        .read(|state| EditorSessionData::from_session(session, state))
        .await
}

fn offset(value: i32, name: &str) -> FieldResult<usize> {
    usize::try_from(value).map_err(|_| {
        field_error(DomainError::InvalidAnnotation(format!(
            "{} must not be negative",
            name
        )))
    })
}

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Reader Queries
    // =========================================================================

    /// Reader feed for a tab and optional search text
    async fn feed(ctx: &GraphQLContext, tab: Option<FeedTab>, query: Option<String>) -> FeedData {
        let query = FeedQuery::new(tab.unwrap_or_default(), query.unwrap_or_default());
        ctx.controller
            .read(|state| {
                let view = FeedView::build(&state.posts, &state.profile, &query);
                FeedData::from_view(&view, state)
            })
            .await
    }

    /// Get a single post by ID (any status). Does not count a view.
    async fn post(ctx: &GraphQLContext, id: Uuid) -> Option<PostData> {
        let post_id = PostId::from_uuid(id);
        ctx.controller
            .read(|state| state.post(post_id).map(|post| PostData::from_post(post, state)))
            .await
    }

    /// Published posts sharing the category or a tag (at most three)
    async fn related_posts(ctx: &GraphQLContext, id: Uuid) -> FieldResult<Vec<PostData>> {
        let post_id = PostId::from_uuid(id);
        ctx.controller
            .read(|state| {
                let post = state.require_post(post_id).map_err(field_error)?;
                Ok(related_posts(&state.posts, post)
                    .into_iter()
                    .map(|p| PostData::from_post(p, state))
                    .collect())
            })
            .await
    }

    /// Detail view of an open reader session
    async fn reader_session(ctx: &GraphQLContext, session_id: Uuid) -> FieldResult<PostDetailData> {
        let session_id = ReaderSessionId::from_uuid(session_id);
        let detail = ctx
            .controller
            .post_detail(session_id)
            .await
            .map_err(field_error)?;
        Ok(ctx
            .controller
            .read(|state| PostDetailData::from_detail(session_id.to_string(), &detail, state))
            .await)
    }

    async fn categories() -> Vec<Category> {
        Category::ALL.to_vec()
    }

    // =========================================================================
    // Profile Queries
    // =========================================================================

    async fn authors(ctx: &GraphQLContext) -> Vec<AuthorData> {
        ctx.controller
            .read(|state| state.authors.iter().map(AuthorData::from).collect())
            .await
    }

    async fn profile(ctx: &GraphQLContext) -> ProfileData {
        ctx.controller
            .read(|state| ProfileData::from(&state.profile))
            .await
    }

    /// Profile with the writer's posts, totals and followed authors
    async fn profile_page(ctx: &GraphQLContext) -> ProfilePageData {
        ctx.controller
            .read(|state| ProfilePageData::from_page(&ProfilePage::build(state), state))
            .await
    }

    // =========================================================================
    // Notification Queries
    // =========================================================================

    /// Newest first
    async fn notifications(ctx: &GraphQLContext) -> Vec<NotificationData> {
        ctx.controller
            .read(|state| state.notifications.iter().map(NotificationData::from).collect())
            .await
    }

    async fn unread_notification_count(ctx: &GraphQLContext) -> i32 {
        ctx.controller
            .read(|state| gql_count(unread_count(state)))
            .await
    }

    // =========================================================================
    // Studio Queries
    // =========================================================================

    /// Every post in store order, for the Author Studio list
    async fn studio_posts(ctx: &GraphQLContext) -> Vec<PostData> {
        ctx.controller
            .read(|state| PostData::list(&state.posts, state))
            .await
    }

    async fn editor_session(ctx: &GraphQLContext, id: Uuid) -> FieldResult<EditorSessionData> {
        let session = ctx
            .controller
            .editor_session(EditorSessionId::from_uuid(id))
            .await
            .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    async fn publish_readiness(
        ctx: &GraphQLContext,
        session_id: Uuid,
    ) -> FieldResult<PublishReadinessData> {
        let session = ctx
            .controller
            .editor_session(EditorSessionId::from_uuid(session_id))
            .await
            .map_err(field_error)?;
        Ok(session.readiness().into())
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Reader Mutations
    // =========================================================================

    /// Select a post: counts a view and starts a reader session
    async fn open_post(ctx: &GraphQLContext, id: Uuid) -> FieldResult<PostDetailData> {
        let (session, detail) = ctx
            .controller
            .open_post(PostId::from_uuid(id))
            .await
            .map_err(field_error)?;
        Ok(ctx
            .controller
            .read(|state| detail_data(&session, &detail, state))
            .await)
    }

    /// Like once per reader session
    async fn like_post(ctx: &GraphQLContext, session_id: Uuid) -> FieldResult<PostDetailData> {
        let session_id = ReaderSessionId::from_uuid(session_id);
        let detail = ctx
            .controller
            .like_post(session_id)
            .await
            .map_err(field_error)?;
        Ok(ctx
            .controller
            .read(|state| PostDetailData::from_detail(session_id.to_string(), &detail, state))
            .await)
    }

    async fn add_review(
        ctx: &GraphQLContext,
        post_id: Uuid,
        comment: String,
        reviewer: Option<String>,
    ) -> FieldResult<PostData> {
        let post_id = PostId::from_uuid(post_id);
        info!(post_id = %post_id, "Adding review");

        let transition = ctx
            .controller
            .execute(PostCommand::AddReview {
                post_id,
                comment,
                reviewer,
            })
            .await
            .map_err(field_error)?;
        post_in(&transition, post_id)
    }

    // =========================================================================
    // Review Panel Mutations
    // =========================================================================

    async fn toggle_review_resolved(
        ctx: &GraphQLContext,
        post_id: Uuid,
        review_id: Uuid,
    ) -> FieldResult<PostData> {
        let post = ctx
            .controller
            .toggle_review_resolved(PostId::from_uuid(post_id), ReviewId::from_uuid(review_id))
            .await
            .map_err(field_error)?;
        Ok(ctx
            .controller
            .read(|state| PostData::from_post(&post, state))
            .await)
    }

    async fn respond_to_review(
        ctx: &GraphQLContext,
        post_id: Uuid,
        review_id: Uuid,
        response: String,
    ) -> FieldResult<PostData> {
        let post = ctx
            .controller
            .respond_to_review(
                PostId::from_uuid(post_id),
                ReviewId::from_uuid(review_id),
                response,
            )
            .await
            .map_err(field_error)?;
        Ok(ctx
            .controller
            .read(|state| PostData::from_post(&post, state))
            .await)
    }

    async fn delete_post(ctx: &GraphQLContext, id: Uuid) -> FieldResult<bool> {
        let post_id = PostId::from_uuid(id);
        info!(post_id = %post_id, "Deleting post");

        ctx.controller
            .execute(PostCommand::Delete { post_id })
            .await
            .map_err(field_error)?;
        Ok(true)
    }

    // =========================================================================
    // Profile Mutations
    // =========================================================================

    async fn update_profile(
        ctx: &GraphQLContext,
        input: UpdateProfileInput,
    ) -> FieldResult<ProfileData> {
        let transition = ctx
            .controller
            .execute(ProfileCommand::Update {
                display_name: input.display_name,
                suffix: input.suffix,
                bio: input.bio,
                avatar_url: input.avatar_url,
            })
            .await
            .map_err(field_error)?;
        Ok(ProfileData::from(&transition.state.profile))
    }

    async fn follow_author(ctx: &GraphQLContext, author_id: Uuid) -> FieldResult<ProfileData> {
        let transition = ctx
            .controller
            .execute(ProfileCommand::Follow {
                author_id: AuthorId::from_uuid(author_id),
            })
            .await
            .map_err(field_error)?;
        Ok(ProfileData::from(&transition.state.profile))
    }

    async fn unfollow_author(ctx: &GraphQLContext, author_id: Uuid) -> FieldResult<ProfileData> {
        let transition = ctx
            .controller
            .execute(ProfileCommand::Unfollow {
                author_id: AuthorId::from_uuid(author_id),
            })
            .await
            .map_err(field_error)?;
        Ok(ProfileData::from(&transition.state.profile))
    }

    // =========================================================================
    // Notification Mutations
    // =========================================================================

    async fn mark_notification_read(
        ctx: &GraphQLContext,
        id: Uuid,
    ) -> FieldResult<NotificationData> {
        let notification_id = NotificationId::from_uuid(id);
        let transition = ctx
            .controller
            .execute(NotificationCommand::MarkRead { notification_id })
            .await
            .map_err(field_error)?;

        transition
            .state
            .notifications
            .iter()
            .find(|n| n.id == notification_id)
            .map(NotificationData::from)
            .ok_or_else(|| field_error(DomainError::NotificationNotFound(notification_id)))
    }

    /// Returns the unread count afterwards (always zero)
    async fn mark_all_notifications_read(ctx: &GraphQLContext) -> FieldResult<i32> {
        let transition = ctx
            .controller
            .execute(NotificationCommand::MarkAllRead)
            .await
            .map_err(field_error)?;
        Ok(gql_count(unread_count(&transition.state)))
    }

    // =========================================================================
    // Studio Mutations
    // =========================================================================

    async fn start_new_post(ctx: &GraphQLContext) -> EditorSessionData {
        let session = ctx.controller.start_new_post().await;
        editor_data(ctx, &session).await
    }

    async fn edit_post(ctx: &GraphQLContext, post_id: Uuid) -> FieldResult<EditorSessionData> {
        let session = ctx
            .controller
            .edit_post(PostId::from_uuid(post_id))
            .await
            .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    async fn update_draft(
        ctx: &GraphQLContext,
        session_id: Uuid,
        input: UpdateDraftInput,
    ) -> FieldResult<EditorSessionData> {
        let session = ctx
            .controller
            .update_draft(EditorSessionId::from_uuid(session_id), input.into())
            .await
            .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    async fn add_tag(
        ctx: &GraphQLContext,
        session_id: Uuid,
        tag: String,
    ) -> FieldResult<EditorSessionData> {
        let (session, _) = ctx
            .controller
            .with_editor(EditorSessionId::from_uuid(session_id), |session| {
                Ok(session.add_tag(&tag))
            })
            .await
            .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    async fn remove_tag(
        ctx: &GraphQLContext,
        session_id: Uuid,
        tag: String,
    ) -> FieldResult<EditorSessionData> {
        let (session, _) = ctx
            .controller
            .with_editor(EditorSessionId::from_uuid(session_id), |session| {
                Ok(session.remove_tag(&tag))
            })
            .await
            .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    /// Link a range of the draft text (offsets into the text without markup)
    /// to one of the post's reviews
    async fn annotate_review(
        ctx: &GraphQLContext,
        session_id: Uuid,
        review_id: Uuid,
        start: i32,
        length: i32,
    ) -> FieldResult<EditorSessionData> {
        let start = offset(start, "start")?;
        let length = offset(length, "length")?;

        let (session, _) = ctx
            .controller
            .with_editor(EditorSessionId::from_uuid(session_id), |session| {
                session.annotate(ReviewId::from_uuid(review_id), start, length)
            })
            .await
            .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    /// Copy-edit the draft content with AI assist
    async fn refine_content(
        ctx: &GraphQLContext,
        session_id: Uuid,
    ) -> FieldResult<EditorSessionData> {
        let session = assist_actions::refine_content(
            &ctx.controller,
            EditorSessionId::from_uuid(session_id),
        )
        .await
        .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    /// Fill the excerpt with an AI generated one-sentence summary
    async fn generate_excerpt(
        ctx: &GraphQLContext,
        session_id: Uuid,
    ) -> FieldResult<EditorSessionData> {
        let session = assist_actions::generate_excerpt(
            &ctx.controller,
            EditorSessionId::from_uuid(session_id),
        )
        .await
        .map_err(field_error)?;
        Ok(editor_data(ctx, &session).await)
    }

    /// Save the draft and close the editor. Publishing is gated by readiness.
    async fn save_post(
        ctx: &GraphQLContext,
        session_id: Uuid,
        status: PostStatus,
    ) -> FieldResult<PostData> {
        let post = ctx
            .controller
            .save_draft(EditorSessionId::from_uuid(session_id), status)
            .await
            .map_err(field_error)?;
        Ok(ctx
            .controller
            .read(|state| PostData::from_post(&post, state))
            .await)
    }

    /// Discard the draft
    async fn close_editor(ctx: &GraphQLContext, session_id: Uuid) -> bool {
        ctx.controller
            .close_editor(EditorSessionId::from_uuid(session_id))
            .await
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
