use serde::Serialize;

use crate::common::NotificationId;
use crate::domains::notifications::models::Notification;

/// Notification domain events
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationEvent {
    NotificationCreated { notification: Notification },
    NotificationRead { notification_id: NotificationId },
    AllNotificationsRead { count: usize },
}
