//! Application state snapshot and the command interface that evolves it.
//!
//! State is never mutated in place. `AppState::apply` clones the snapshot,
//! runs the domain action against the clone and hands back the new snapshot
//! together with the events it produced. When the action fails the clone is
//! dropped, so a rejected command can never leave a partial write behind.

use chrono::NaiveDate;
use serde::Serialize;

use super::{AuthorId, DomainError, DomainResult, PostId};
use crate::domains::notifications::{self, Notification, NotificationCommand, NotificationEvent};
use crate::domains::posts::seed::seed_posts;
use crate::domains::posts::{self, Post, PostCommand, PostEvent};
use crate::domains::profile::seed::seed_directory;
use crate::domains::profile::{self, Author, Profile, ProfileCommand, ProfileEvent};

/// Shown for posts whose author is missing from the directory.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// Everything the service holds in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Store order: new posts are prepended, saves replace in place
    pub posts: Vec<Post>,
    pub authors: Vec<Author>,
    pub profile: Profile,
    /// Newest first
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// State with no posts or notifications. The profile's author is added to
    /// the directory when missing.
    pub fn new(profile: Profile, mut authors: Vec<Author>) -> Self {
        if !authors.iter().any(|a| a.id == profile.author_id) {
            authors.push(Author {
                id: profile.author_id,
                name: profile.display_name.clone(),
            });
        }

        Self {
            posts: Vec::new(),
            authors,
            profile,
            notifications: Vec::new(),
        }
    }

    /// The initial dataset: three authors, three posts and the writer profile.
    pub fn seeded() -> Self {
        let (authors, profile, ids) = seed_directory();
        let mut state = Self::new(profile, authors);
        state.posts = seed_posts(&ids);
        state
    }

    pub fn post(&self, post_id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    pub fn require_post(&self, post_id: PostId) -> DomainResult<&Post> {
        self.post(post_id).ok_or(DomainError::PostNotFound(post_id))
    }

    pub(crate) fn post_mut(&mut self, post_id: PostId) -> DomainResult<&mut Post> {
        self.posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(DomainError::PostNotFound(post_id))
    }

    pub fn author(&self, author_id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == author_id)
    }

    pub fn author_name(&self, author_id: AuthorId) -> &str {
        self.author(author_id)
            .map(|a| a.name.as_str())
            .unwrap_or(UNKNOWN_AUTHOR)
    }

    /// Apply a command to a copy of this snapshot.
    pub fn apply(
        &self,
        command: impl Into<AppCommand>,
        today: NaiveDate,
    ) -> DomainResult<Transition> {
        let mut next = self.clone();

        let events = match command.into() {
            AppCommand::Post(command) => posts::actions::apply(&mut next, command, today)?,
            AppCommand::Profile(command) => profile::actions::apply(&mut next, command)?,
            AppCommand::Notification(command) => {
                notifications::actions::apply(&mut next, command)?
            }
        };

        Ok(Transition {
            state: next,
            events,
        })
    }
}

/// Result of a successful command: the new snapshot and what happened.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: AppState,
    pub events: Vec<AppEvent>,
}

impl Transition {
    /// Notifications created by this transition, newest first.
    pub fn created_notifications(&self) -> impl Iterator<Item = &Notification> {
        self.events.iter().filter_map(|event| match event {
            AppEvent::Notification(NotificationEvent::NotificationCreated { notification }) => {
                Some(notification)
            }
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    Post(PostCommand),
    Profile(ProfileCommand),
    Notification(NotificationCommand),
}

impl From<PostCommand> for AppCommand {
    fn from(command: PostCommand) -> Self {
        AppCommand::Post(command)
    }
}

impl From<ProfileCommand> for AppCommand {
    fn from(command: ProfileCommand) -> Self {
        AppCommand::Profile(command)
    }
}

impl From<NotificationCommand> for AppCommand {
    fn from(command: NotificationCommand) -> Self {
        AppCommand::Notification(command)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AppEvent {
    Post(PostEvent),
    Profile(ProfileEvent),
    Notification(NotificationEvent),
}

impl From<PostEvent> for AppEvent {
    fn from(event: PostEvent) -> Self {
        AppEvent::Post(event)
    }
}

impl From<ProfileEvent> for AppEvent {
    fn from(event: ProfileEvent) -> Self {
        AppEvent::Profile(event)
    }
}

impl From<NotificationEvent> for AppEvent {
    fn from(event: NotificationEvent) -> Self {
        AppEvent::Notification(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::posts::PostStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_seeded_state() {
        let state = AppState::seeded();

        assert_eq!(state.posts.len(), 3);
        assert_eq!(state.authors.len(), 3);
        assert!(state.notifications.is_empty());
        assert_eq!(state.author_name(state.profile.author_id), "Dr. Sarah Chen");
        assert!(state.posts[0].featured);
        assert_eq!(state.posts[2].status, PostStatus::Review);
        assert!(state.posts[2].reviews[0].resolved);
    }

    #[test]
    fn test_failed_command_leaves_snapshot_untouched() {
        let state = AppState::seeded();
        let before = state.clone();

        let result = state.apply(
            PostCommand::AddReview {
                post_id: state.posts[0].id,
                comment: "   ".to_string(),
                reviewer: None,
            },
            today(),
        );

        assert_eq!(result.unwrap_err(), DomainError::EmptyReview);
        assert_eq!(state, before);
    }

    #[test]
    fn test_apply_returns_new_snapshot() {
        let state = AppState::seeded();
        let post_id = state.posts[1].id;

        let transition = state.apply(PostCommand::View { post_id }, today()).unwrap();

        assert_eq!(state.posts[1].views, 856);
        assert_eq!(transition.state.posts[1].views, 857);
        assert_eq!(
            transition.events,
            vec![AppEvent::Post(PostEvent::PostViewed {
                post_id,
                views: 857
            })]
        );
    }

    #[test]
    fn test_unknown_author_name() {
        let state = AppState::seeded();
        assert_eq!(state.author_name(AuthorId::new()), UNKNOWN_AUTHOR);
    }
}
