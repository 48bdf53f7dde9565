pub mod annotation;
pub mod post;
pub mod review;

pub use annotation::FeedbackAnnotation;
pub use post::{Category, Post, PostStatus};
pub use review::{Review, DEFAULT_REVIEWER};
