//! Author Studio domain - editor sessions and the publish readiness gate

pub mod data;
pub mod editor;
pub mod readiness;

pub use editor::{DraftEdit, EditorSession};
pub use readiness::PublishReadiness;
