use serde::{Deserialize, Serialize};

use crate::common::NotificationId;

/// Notification domain commands. Notifications are only created as a side
/// effect of publishing, so there is no create command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationCommand {
    MarkRead { notification_id: NotificationId },
    MarkAllRead,
}
