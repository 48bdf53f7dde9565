//! Notifications domain - alerts raised when posts are published

pub mod actions;
pub mod commands;
pub mod data;
pub mod events;
pub mod models;

pub use commands::NotificationCommand;
pub use data::NotificationData;
pub use events::NotificationEvent;
pub use models::{Notification, NotificationKind};

/// Stream hub topic carrying newly created notifications
pub const NOTIFICATIONS_TOPIC: &str = "notifications";
