use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::NotificationId;

/// Ephemeral alert shown in the navbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub date: NaiveDate,
    pub read: bool,
    pub kind: NotificationKind,
}

impl Notification {
    /// Alert for a post that just became published.
    pub fn new_post(author_name: &str, post_title: &str, date: NaiveDate) -> Self {
        Self {
            id: NotificationId::new(),
            title: "New Article Published".to_string(),
            message: format!("{} just published: {}", author_name, post_title),
            date,
            read: false,
            kind: NotificationKind::NewPost,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, juniper::GraphQLEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewPost,
    Review,
    System,
}
