//! Notification domain actions

use chrono::NaiveDate;
use tracing::debug;

use crate::common::{AppEvent, AppState, DomainError, DomainResult, NotificationId};
use crate::domains::notifications::commands::NotificationCommand;
use crate::domains::notifications::events::NotificationEvent;
use crate::domains::notifications::models::Notification;

pub fn apply(state: &mut AppState, command: NotificationCommand) -> DomainResult<Vec<AppEvent>> {
    debug!(?command, "Applying notification command");

    match command {
        NotificationCommand::MarkRead { notification_id } => mark_read(state, notification_id),
        NotificationCommand::MarkAllRead => mark_all_read(state),
    }
}

/// Prepend a "new article" notification. Called when a save publishes a post.
pub fn announce_publication(
    state: &mut AppState,
    author_name: &str,
    post_title: &str,
    today: NaiveDate,
) -> AppEvent {
    let notification = Notification::new_post(author_name, post_title, today);
    state.notifications.insert(0, notification.clone());

    NotificationEvent::NotificationCreated { notification }.into()
}

pub fn mark_read(
    state: &mut AppState,
    notification_id: NotificationId,
) -> DomainResult<Vec<AppEvent>> {
    let notification = state
        .notifications
        .iter_mut()
        .find(|n| n.id == notification_id)
        .ok_or(DomainError::NotificationNotFound(notification_id))?;
    notification.read = true;

    Ok(vec![NotificationEvent::NotificationRead { notification_id }.into()])
}

pub fn mark_all_read(state: &mut AppState) -> DomainResult<Vec<AppEvent>> {
    let mut count = 0;
    for notification in state.notifications.iter_mut().filter(|n| !n.read) {
        notification.read = true;
        count += 1;
    }

    Ok(vec![NotificationEvent::AllNotificationsRead { count }.into()])
}

pub fn unread_count(state: &AppState) -> usize {
    state.notifications.iter().filter(|n| !n.read).count()
}
