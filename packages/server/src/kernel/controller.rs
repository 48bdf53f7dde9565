//! Root controller owning the application state.
//!
//! The snapshot lives behind a `tokio::sync::RwLock`. Commands are applied
//! under the write lock and the new snapshot replaces the old one in a single
//! assignment. Editor and reader sessions are tracked next to it; they are
//! view state and never part of the snapshot.
//!
//! Lock order is sessions first, then state. Nothing holds a lock across an
//! AI call.

use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::common::{
    AppCommand, AppEvent, AppState, DomainError, DomainResult, EditorSessionId, PostId,
    ReaderSessionId, ReviewId, Transition,
};
use crate::domains::notifications::{NotificationEvent, NOTIFICATIONS_TOPIC};
use crate::domains::posts::{Post, PostCommand, PostStatus};
use crate::domains::reader::{PostDetail, ReaderSession};
use crate::domains::studio::{DraftEdit, EditorSession};
use crate::kernel::ServerDeps;

pub struct AppController {
    state: RwLock<AppState>,
    editors: RwLock<HashMap<EditorSessionId, EditorSession>>,
    readers: RwLock<HashMap<ReaderSessionId, ReaderSession>>,
    deps: ServerDeps,
}

impl AppController {
    pub fn new(initial: AppState, deps: ServerDeps) -> Self {
        Self {
            state: RwLock::new(initial),
            editors: RwLock::new(HashMap::new()),
            readers: RwLock::new(HashMap::new()),
            deps,
        }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Clone of the current snapshot.
    pub async fn snapshot(&self) -> AppState {
        self.state.read().await.clone()
    }

    /// Run a read-only view function against the current snapshot.
    pub async fn read<R>(&self, view: impl FnOnce(&AppState) -> R) -> R {
        let state = self.state.read().await;
        view(&state)
    }

    /// Apply a command and swap in the resulting snapshot.
    ///
    /// Returns the transition with a copy of the new snapshot. Notifications
    /// it created are published to the stream hub after the lock is released.
    pub async fn execute(&self, command: impl Into<AppCommand>) -> DomainResult<Transition> {
        let command = command.into();

        let transition = {
            let mut state = self.state.write().await;
            let transition = state.apply(command, Self::today()).map_err(|e| {
                warn!(error = %e, code = e.code(), "Command rejected");
                e
            })?;
            *state = transition.state.clone();
            transition
        };

        debug!(events = transition.events.len(), "Command applied");
        self.publish_notifications(&transition).await;

        Ok(transition)
    }

    async fn publish_notifications(&self, transition: &Transition) {
        for notification in transition.created_notifications() {
            info!(notification_id = %notification.id, title = %notification.title, "Notification created");
            let event = AppEvent::Notification(NotificationEvent::NotificationCreated {
                notification: notification.clone(),
            });
            self.deps
                .stream_hub
                .publish_event(NOTIFICATIONS_TOPIC, &event)
                .await;
        }
    }

    // =========================================================================
    // Reader sessions
    // =========================================================================

    /// Select a post: count the view and start a fresh reader session.
    pub async fn open_post(&self, post_id: PostId) -> DomainResult<(ReaderSession, PostDetail)> {
        let mut readers = self.readers.write().await;
        let transition = self.execute(PostCommand::View { post_id }).await?;

        let session = ReaderSession::open(post_id);
        let detail = PostDetail::build(&transition.state, &session)?;
        readers.insert(session.id, session.clone());

        debug!(post_id = %post_id, session_id = %session.id, "Reader session opened");
        Ok((session, detail))
    }

    pub async fn post_detail(&self, session_id: ReaderSessionId) -> DomainResult<PostDetail> {
        let readers = self.readers.read().await;
        let session = readers
            .get(&session_id)
            .ok_or(DomainError::ReaderSessionNotFound(session_id))?;
        let state = self.state.read().await;
        PostDetail::build(&state, session)
    }

    /// Like through a reader session. Only the first like of a session
    /// reaches the store; later ones return the detail unchanged.
    pub async fn like_post(&self, session_id: ReaderSessionId) -> DomainResult<PostDetail> {
        let mut readers = self.readers.write().await;
        let session = readers
            .get_mut(&session_id)
            .ok_or(DomainError::ReaderSessionNotFound(session_id))?;

        if session.has_liked {
            let state = self.state.read().await;
            return PostDetail::build(&state, session);
        }

        let transition = self
            .execute(PostCommand::Like {
                post_id: session.post_id,
            })
            .await?;
        session.claim_like();

        PostDetail::build(&transition.state, session)
    }

    // =========================================================================
    // Editor sessions
    // =========================================================================

    pub async fn start_new_post(&self) -> EditorSession {
        let profile = self.read(|state| state.profile.clone()).await;
        let session = EditorSession::new_post(&profile, Self::today());
        self.editors
            .write()
            .await
            .insert(session.id, session.clone());

        info!(session_id = %session.id, post_id = %session.draft.id, "Editor opened for new post");
        session
    }

    pub async fn edit_post(&self, post_id: PostId) -> DomainResult<EditorSession> {
        let post = self
            .read(|state| state.require_post(post_id).cloned())
            .await?;
        let session = EditorSession::edit(&post);
        self.editors
            .write()
            .await
            .insert(session.id, session.clone());

        info!(session_id = %session.id, post_id = %post_id, "Editor opened");
        Ok(session)
    }

    pub async fn editor_session(&self, session_id: EditorSessionId) -> DomainResult<EditorSession> {
        self.editors
            .read()
            .await
            .get(&session_id)
            .cloned()
            .ok_or(DomainError::EditorSessionNotFound(session_id))
    }

    /// Run a mutation against an open editor session and return the result.
    pub async fn with_editor<R>(
        &self,
        session_id: EditorSessionId,
        edit: impl FnOnce(&mut EditorSession) -> DomainResult<R>,
    ) -> DomainResult<(EditorSession, R)> {
        let mut editors = self.editors.write().await;
        let session = editors
            .get_mut(&session_id)
            .ok_or(DomainError::EditorSessionNotFound(session_id))?;
        let result = edit(session)?;
        Ok((session.clone(), result))
    }

    pub async fn update_draft(
        &self,
        session_id: EditorSessionId,
        edit: DraftEdit,
    ) -> DomainResult<EditorSession> {
        let (session, ()) = self
            .with_editor(session_id, |session| {
                session.apply_edit(edit);
                Ok(())
            })
            .await?;
        Ok(session)
    }

    /// Save the draft with `status`, close the session and return the stored post.
    pub async fn save_draft(
        &self,
        session_id: EditorSessionId,
        status: PostStatus,
    ) -> DomainResult<Post> {
        let mut editors = self.editors.write().await;
        let session = editors
            .get(&session_id)
            .ok_or(DomainError::EditorSessionNotFound(session_id))?;

        let post = session.prepare_save(status)?;
        let post_id = post.id;
        let transition = self
            .execute(PostCommand::Save {
                post: Box::new(post),
            })
            .await?;
        editors.remove(&session_id);

        info!(session_id = %session_id, post_id = %post_id, status = %status, "Draft saved");
        transition.state.require_post(post_id).cloned()
    }

    pub async fn open_editor_count(&self) -> usize {
        self.editors.read().await.len()
    }

    /// Discard the session without saving. Returns false if it was not open.
    pub async fn close_editor(&self, session_id: EditorSessionId) -> bool {
        self.editors.write().await.remove(&session_id).is_some()
    }

    // =========================================================================
    // Review panel
    // =========================================================================

    pub async fn toggle_review_resolved(
        &self,
        post_id: PostId,
        review_id: ReviewId,
    ) -> DomainResult<Post> {
        let transition = self
            .execute(PostCommand::ToggleReviewResolved { post_id, review_id })
            .await?;
        self.mirror_reviews(&transition, post_id).await
    }

    pub async fn respond_to_review(
        &self,
        post_id: PostId,
        review_id: ReviewId,
        response: String,
    ) -> DomainResult<Post> {
        let transition = self
            .execute(PostCommand::RespondToReview {
                post_id,
                review_id,
                response,
            })
            .await?;
        self.mirror_reviews(&transition, post_id).await
    }

    /// Copy the stored reviews into every open editor of the post.
    async fn mirror_reviews(&self, transition: &Transition, post_id: PostId) -> DomainResult<Post> {
        let post = transition.state.require_post(post_id)?.clone();

        let mut editors = self.editors.write().await;
        for session in editors.values_mut().filter(|s| s.draft.id == post_id) {
            session.sync_reviews(&post.reviews);
        }

        Ok(post)
    }

    // =========================================================================
    // AI assist bookkeeping
    // =========================================================================

    /// Mark the session's assist as running and return the title and content
    /// to send. Fails if a request is already running for this session.
    pub async fn begin_assist(&self, session_id: EditorSessionId) -> DomainResult<(String, String)> {
        let (_, request) = self
            .with_editor(session_id, |session| {
                if session.assist_in_progress {
                    return Err(DomainError::AssistInProgress);
                }
                if session.draft.title.trim().is_empty() {
                    return Err(DomainError::MissingField("title"));
                }
                if session.draft.content.trim().is_empty() {
                    return Err(DomainError::MissingField("content"));
                }
                session.assist_in_progress = true;
                Ok((session.draft.title.clone(), session.draft.content.clone()))
            })
            .await?;
        Ok(request)
    }

    /// Clear the in-progress flag and apply the outcome to the session.
    pub async fn finish_assist(
        &self,
        session_id: EditorSessionId,
        apply: impl FnOnce(&mut EditorSession),
    ) -> DomainResult<EditorSession> {
        let (session, ()) = self
            .with_editor(session_id, |session| {
                session.assist_in_progress = false;
                apply(session);
                Ok(())
            })
            .await?;
        Ok(session)
    }
}
