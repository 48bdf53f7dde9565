//! Profile domain - the writer's identity, the author directory and follows

pub mod actions;
pub mod commands;
pub mod data;
pub mod events;
pub mod models;
pub mod page;
pub mod seed;

pub use commands::ProfileCommand;
pub use events::ProfileEvent;
pub use models::{Author, Profile};
pub use page::ProfilePage;
