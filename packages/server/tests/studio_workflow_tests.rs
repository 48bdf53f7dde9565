//! Integration tests for reader sessions and the Author Studio editor.

mod common;

use std::time::Duration;

use crate::common::{post_id, words, TestHarness, HABITS, RESILIENCE};
use psyche_core::common::{DomainError, EditorSessionId};
use psyche_core::domains::notifications::NOTIFICATIONS_TOPIC;
use psyche_core::domains::posts::PostStatus;
use psyche_core::domains::studio::DraftEdit;
use test_context::test_context;

// =============================================================================
// Reader sessions
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn opening_a_post_counts_one_view(ctx: &TestHarness) {
    let id = post_id(&ctx.state().await, HABITS);

    let (session, detail) = ctx.controller.open_post(id).await.unwrap();

    assert_eq!(session.post_id, id);
    assert!(!detail.has_liked);
    assert_eq!(detail.post.views, 1241);
    assert_eq!(detail.author_name, "Dr. Sarah Chen");
    // The profile is Sarah Chen, who follows nobody in the seed
    assert!(!detail.following);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn a_reader_session_likes_at_most_once(ctx: &TestHarness) {
    let id = post_id(&ctx.state().await, HABITS);
    let (session, _) = ctx.controller.open_post(id).await.unwrap();

    let first = ctx.controller.like_post(session.id).await.unwrap();
    let second = ctx.controller.like_post(session.id).await.unwrap();

    assert!(first.has_liked);
    assert_eq!(first.post.likes, 46);
    assert_eq!(second.post.likes, 46);

    // Reopening the post starts a new session with its own like
    let (again, _) = ctx.controller.open_post(id).await.unwrap();
    let third = ctx.controller.like_post(again.id).await.unwrap();
    assert_eq!(third.post.likes, 47);
}

// =============================================================================
// Editor
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn saving_a_draft_closes_the_editor(ctx: &TestHarness) {
    let session = ctx.controller.start_new_post().await;
    ctx.controller
        .update_draft(
            session.id,
            DraftEdit {
                title: Some("Sleep and Memory".to_string()),
                content: Some(words(50)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let post = ctx
        .controller
        .save_draft(session.id, PostStatus::Draft)
        .await
        .unwrap();

    let state = ctx.state().await;
    assert_eq!(state.posts[0].id, post.id);
    assert_eq!(state.posts[0].status, PostStatus::Draft);
    assert_eq!(state.posts.len(), 4);
    assert!(state.notifications.is_empty());
    assert!(matches!(
        ctx.controller.editor_session(session.id).await,
        Err(DomainError::EditorSessionNotFound(_))
    ));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn failed_save_keeps_the_editor_open(ctx: &TestHarness) {
    let session = ctx.controller.start_new_post().await;

    let err = ctx
        .controller
        .save_draft(session.id, PostStatus::Review)
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::MissingField("title"));
    assert!(ctx.controller.editor_session(session.id).await.is_ok());
    assert_eq!(ctx.state().await.posts.len(), 3);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn publishing_is_blocked_until_the_checklist_passes(ctx: &TestHarness) {
    let id = post_id(&ctx.state().await, RESILIENCE);
    let mut updates = ctx.stream_hub.subscribe(NOTIFICATIONS_TOPIC).await;

    // Seeded with 18 likes; two readers bring it to the threshold
    for _ in 0..2 {
        let (reader, _) = ctx.controller.open_post(id).await.unwrap();
        ctx.controller.like_post(reader.id).await.unwrap();
    }

    let session = ctx.controller.edit_post(id).await.unwrap();
    assert_eq!(session.readiness().likes, 20);

    let err = ctx
        .controller
        .save_draft(session.id, PostStatus::Published)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::PublishBlocked(_)));

    ctx.controller
        .update_draft(
            session.id,
            DraftEdit {
                content: Some(words(300)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let post = ctx
        .controller
        .save_draft(session.id, PostStatus::Published)
        .await
        .unwrap();
    assert_eq!(post.status, PostStatus::Published);

    let state = ctx.state().await;
    assert_eq!(state.notifications.len(), 1);

    let event = tokio::time::timeout(Duration::from_secs(1), updates.recv())
        .await
        .expect("notification was not streamed")
        .unwrap();
    assert_eq!(event["type"], "notification_created");
    assert_eq!(
        event["notification"]["message"],
        format!("Elena Rodriguez just published: {}", RESILIENCE)
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn review_panel_changes_reach_open_editors(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, RESILIENCE);
    let review_id = state.post(id).unwrap().reviews[0].id;
    let session = ctx.controller.edit_post(id).await.unwrap();

    ctx.controller
        .toggle_review_resolved(id, review_id)
        .await
        .unwrap();

    let session = ctx.controller.editor_session(session.id).await.unwrap();
    assert!(!session.draft.reviews[0].resolved);
    assert_eq!(session.readiness().unresolved_reviews, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn closing_an_unknown_editor_is_a_no_op(ctx: &TestHarness) {
    assert!(!ctx.controller.close_editor(EditorSessionId::new()).await);

    let session = ctx.controller.start_new_post().await;
    assert!(ctx.controller.close_editor(session.id).await);
    assert_eq!(ctx.controller.open_editor_count().await, 0);
}
