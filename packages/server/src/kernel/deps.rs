//! Server dependencies (using traits for testability)
//!
//! Central dependency container handed to the controller. External services
//! sit behind trait objects so tests can swap in mocks.

use std::sync::Arc;

use crate::kernel::{stream_hub::StreamHub, BaseAI};

#[derive(Clone)]
pub struct ServerDeps {
    /// Text assist used by the editor (refine, summarize)
    pub ai: Arc<dyn BaseAI>,
    /// In-process pub/sub hub for real-time streaming to SSE endpoints
    pub stream_hub: StreamHub,
}

impl ServerDeps {
    pub fn new(ai: Arc<dyn BaseAI>, stream_hub: StreamHub) -> Self {
        Self { ai, stream_hub }
    }
}
