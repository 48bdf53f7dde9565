use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::notifications::models::{Notification, NotificationKind};

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
pub struct NotificationData {
    pub id: String,
    pub title: String,
    pub message: String,
    pub date: String,
    pub read: bool,
    pub kind: NotificationKind,
}

impl From<&Notification> for NotificationData {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            title: notification.title.clone(),
            message: notification.message.clone(),
            date: notification.date.to_string(),
            read: notification.read,
            kind: notification.kind,
        }
    }
}
