//! Kernel module - state controller, infrastructure and dependencies.

pub mod ai;
pub mod controller;
pub mod deps;
pub mod stream_hub;
pub mod test_dependencies;
pub mod traits;

pub use ai::{DisabledAI, GeminiAI, DEFAULT_MODEL};
pub use controller::AppController;
pub use deps::ServerDeps;
pub use stream_hub::StreamHub;
pub use test_dependencies::{MockAI, TestDependencies};
pub use traits::*;
