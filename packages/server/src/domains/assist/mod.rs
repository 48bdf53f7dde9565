//! Assist domain - AI copy-editing and excerpt generation for drafts

pub mod actions;
pub mod prompts;

pub use actions::{generate_excerpt, refine_content};
