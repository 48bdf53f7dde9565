//! Posts domain - the post store and its review workflow

pub mod actions;
pub mod commands;
pub mod data;
pub mod events;
pub mod models;
pub mod seed;

pub use commands::PostCommand;
pub use data::PostData;
pub use events::PostEvent;
pub use models::{Category, FeedbackAnnotation, Post, PostStatus, Review};
