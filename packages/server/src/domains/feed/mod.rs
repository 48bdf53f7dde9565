//! Feed domain - what a reader sees: tab filtering, search and related posts

pub mod data;
pub mod filter;
pub mod related;

pub use filter::{featured_post, filter_feed, FeedQuery, FeedTab, FeedView};
pub use related::{related_posts, MAX_RELATED_POSTS};
