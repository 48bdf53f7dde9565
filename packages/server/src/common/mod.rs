// Common types and utilities shared across the application

pub mod app_state;
pub mod entity_ids;
pub mod errors;
pub mod id;
pub mod utils;

pub use app_state::{AppCommand, AppEvent, AppState, Transition};
pub use entity_ids::*;
pub use errors::{DomainError, DomainResult};
pub use id::{Id, V4, V7};
