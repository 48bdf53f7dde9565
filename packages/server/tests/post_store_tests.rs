//! Integration tests for the post store commands through the controller.

mod common;

use crate::common::{post_id, words, TestHarness, ATTACHMENT, HABITS, RESILIENCE};
use psyche_core::common::{AuthorId, DomainError, PostId, ReviewId};
use psyche_core::domains::notifications::{NotificationCommand, NotificationKind};
use psyche_core::domains::posts::models::DEFAULT_REVIEWER;
use psyche_core::domains::posts::{PostCommand, PostStatus};
use test_context::test_context;

// =============================================================================
// Engagement
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn view_and_like_only_touch_their_counter(ctx: &TestHarness) {
    let before = ctx.state().await;
    let id = post_id(&before, HABITS);

    ctx.controller
        .execute(PostCommand::View { post_id: id })
        .await
        .unwrap();
    ctx.controller
        .execute(PostCommand::Like { post_id: id })
        .await
        .unwrap();

    let after = ctx.state().await;
    let (old, new) = (before.post(id).unwrap(), after.post(id).unwrap());
    assert_eq!(new.views, old.views + 1);
    assert_eq!(new.likes, old.likes + 1);
    assert_eq!(new.title, old.title);
    assert_eq!(new.reviews, old.reviews);
    assert_eq!(after.posts.len(), before.posts.len());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_post_is_rejected(ctx: &TestHarness) {
    let before = ctx.state().await;
    let missing = PostId::new();

    let err = ctx
        .controller
        .execute(PostCommand::View { post_id: missing })
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::PostNotFound(missing));
    assert_eq!(ctx.state().await, before);
}

// =============================================================================
// Reviews
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn new_reviews_are_prepended_and_unresolved(ctx: &TestHarness) {
    let id = post_id(&ctx.state().await, RESILIENCE);

    ctx.controller
        .execute(PostCommand::AddReview {
            post_id: id,
            comment: "  Cite the longitudinal study.  ".to_string(),
            reviewer: None,
        })
        .await
        .unwrap();

    let state = ctx.state().await;
    let post = state.post(id).unwrap();
    assert_eq!(post.reviews.len(), 2);
    assert_eq!(post.reviews[0].comment, "Cite the longitudinal study.");
    assert_eq!(post.reviews[0].reviewer, DEFAULT_REVIEWER);
    assert!(!post.reviews[0].resolved);
    assert_eq!(post.unresolved_review_count(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn blank_review_is_rejected(ctx: &TestHarness) {
    let id = post_id(&ctx.state().await, RESILIENCE);

    let err = ctx
        .controller
        .execute(PostCommand::AddReview {
            post_id: id,
            comment: " \n ".to_string(),
            reviewer: Some("Dr. Patel".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::EmptyReview);
    assert_eq!(ctx.state().await.post(id).unwrap().reviews.len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn toggling_a_review_twice_restores_it(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, RESILIENCE);
    let review_id = state.post(id).unwrap().reviews[0].id;

    let post = ctx
        .controller
        .toggle_review_resolved(id, review_id)
        .await
        .unwrap();
    assert!(!post.reviews[0].resolved);

    let post = ctx
        .controller
        .toggle_review_resolved(id, review_id)
        .await
        .unwrap();
    assert!(post.reviews[0].resolved);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn responding_replaces_the_author_response(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, RESILIENCE);
    let review_id = state.post(id).unwrap().reviews[0].id;

    let post = ctx
        .controller
        .respond_to_review(id, review_id, "Added a citation in section two.".to_string())
        .await
        .unwrap();

    assert_eq!(
        post.reviews[0].author_response.as_deref(),
        Some("Added a citation in section two.")
    );

    let err = ctx
        .controller
        .respond_to_review(id, ReviewId::new(), "Thanks".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ReviewNotFound { .. }));
}

// =============================================================================
// Save and delete
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn saving_an_existing_post_keeps_its_position(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, ATTACHMENT);
    let mut post = state.post(id).unwrap().clone();
    post.title = "Attachment Styles Revisited".to_string();

    ctx.controller
        .execute(PostCommand::Save {
            post: Box::new(post),
        })
        .await
        .unwrap();

    let after = ctx.state().await;
    assert_eq!(after.posts.len(), 3);
    assert_eq!(after.posts[1].id, id);
    assert_eq!(after.posts[1].title, "Attachment Styles Revisited");
    // Re-saving a published post announces nothing
    assert!(after.notifications.is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn saving_strips_unsafe_markup_and_fills_excerpt(ctx: &TestHarness) {
    let state = ctx.state().await;
    let mut post = state.posts[0].clone();
    post.id = PostId::new();
    post.status = PostStatus::Draft;
    post.excerpt = String::new();
    post.content = format!("{}<script>alert('x')</script>", words(40));

    let transition = ctx
        .controller
        .execute(PostCommand::Save {
            post: Box::new(post.clone()),
        })
        .await
        .unwrap();

    let saved = &transition.state.posts[0];
    assert_eq!(saved.id, post.id);
    assert!(!saved.content.contains("<script"));
    assert!(!saved.excerpt.is_empty());
    assert!(saved.excerpt.starts_with("insight insight"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn content_that_sanitizes_to_nothing_is_rejected(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, RESILIENCE);
    let original = state.post(id).unwrap().content.clone();
    let mut post = state.post(id).unwrap().clone();
    post.content = "<script>alert(1)</script>".to_string();

    let err = ctx
        .controller
        .execute(PostCommand::Save {
            post: Box::new(post),
        })
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::MissingField("content"));
    assert_eq!(ctx.state().await.post(id).unwrap().content, original);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn saving_for_an_unknown_author_is_rejected(ctx: &TestHarness) {
    let state = ctx.state().await;
    let mut post = state.posts[0].clone();
    post.id = PostId::new();
    post.author_id = AuthorId::new();

    let err = ctx
        .controller
        .execute(PostCommand::Save {
            post: Box::new(post),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::AuthorNotFound(_)));
    assert_eq!(ctx.state().await.posts.len(), 3);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn publishing_announces_exactly_once(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, RESILIENCE);
    let mut post = state.post(id).unwrap().clone();
    post.status = PostStatus::Published;

    ctx.controller
        .execute(PostCommand::Save {
            post: Box::new(post.clone()),
        })
        .await
        .unwrap();
    ctx.controller
        .execute(PostCommand::Save {
            post: Box::new(post),
        })
        .await
        .unwrap();

    let after = ctx.state().await;
    assert_eq!(after.notifications.len(), 1);
    let notification = &after.notifications[0];
    assert_eq!(notification.kind, NotificationKind::NewPost);
    assert_eq!(notification.title, "New Article Published");
    assert_eq!(
        notification.message,
        format!("Elena Rodriguez just published: {}", RESILIENCE)
    );
    assert!(!notification.read);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn republishing_after_unpublishing_announces_again(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, RESILIENCE);
    let post = state.post(id).unwrap().clone();

    for status in [
        PostStatus::Published,
        PostStatus::Draft,
        PostStatus::Published,
    ] {
        let mut next = post.clone();
        next.status = status;
        ctx.controller
            .execute(PostCommand::Save {
                post: Box::new(next),
            })
            .await
            .unwrap();
    }

    let after = ctx.state().await;
    assert_eq!(after.post(id).unwrap().status, PostStatus::Published);
    assert_eq!(after.notifications.len(), 2);
    assert!(after
        .notifications
        .iter()
        .all(|n| n.message == format!("Elena Rodriguez just published: {}", RESILIENCE)));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn delete_removes_only_that_post(ctx: &TestHarness) {
    let state = ctx.state().await;
    let id = post_id(&state, ATTACHMENT);

    ctx.controller
        .execute(PostCommand::Delete { post_id: id })
        .await
        .unwrap();

    let after = ctx.state().await;
    assert!(after.post(id).is_none());
    assert_eq!(after.posts.len(), 2);

    let err = ctx
        .controller
        .execute(PostCommand::Delete { post_id: id })
        .await
        .unwrap_err();
    assert_eq!(err, DomainError::PostNotFound(id));
}

// =============================================================================
// Notifications
// =============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn mark_all_read_clears_the_badge(ctx: &TestHarness) {
    let state = ctx.state().await;
    let mut post = state.post(post_id(&state, RESILIENCE)).unwrap().clone();
    post.status = PostStatus::Published;
    ctx.controller
        .execute(PostCommand::Save {
            post: Box::new(post),
        })
        .await
        .unwrap();
    assert_eq!(ctx.state().await.notifications.iter().filter(|n| !n.read).count(), 1);

    let transition = ctx
        .controller
        .execute(NotificationCommand::MarkAllRead)
        .await
        .unwrap();

    assert!(transition.state.notifications.iter().all(|n| n.read));
}
