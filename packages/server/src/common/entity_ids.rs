//! Typed ID definitions for all domain entities.

pub use super::id::{Id, V4, V7};

/// Marker type for blog posts.
pub struct Post;

/// Marker type for peer reviews attached to a post.
pub struct Review;

/// Marker type for authors (the join key between posts, profiles and follows).
pub struct Author;

/// Marker type for notifications.
pub struct Notification;

/// Marker type for Author Studio editing sessions.
pub struct EditorSession;

/// Marker type for reader detail-view sessions.
pub struct ReaderSession;

pub type PostId = Id<Post>;
pub type ReviewId = Id<Review>;
pub type AuthorId = Id<Author>;
pub type NotificationId = Id<Notification>;
pub type EditorSessionId = Id<EditorSession, V4>;
pub type ReaderSessionId = Id<ReaderSession, V4>;
