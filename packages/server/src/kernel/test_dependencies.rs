// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use super::{BaseAI, ServerDeps, StreamHub};

// =============================================================================
// Mock AI
// =============================================================================

/// Which assist operation a call was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistOperation {
    Refine,
    Summarize,
}

/// Arguments captured from an AI call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistCall {
    pub operation: AssistOperation,
    pub title: String,
    pub content: String,
}

/// Scripted AI: answers from a queue, records every call.
///
/// With an empty queue, refine echoes the content and summarize returns a
/// fixed sentence.
pub struct MockAI {
    responses: Arc<Mutex<Vec<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<AssistCall>>>,
    gate: Option<Arc<Notify>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            gate: None,
        }
    }

    /// Add a successful response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Add a failure to the queue
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    /// Hold every call until the gate is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Get all calls made so far
    pub fn calls(&self) -> Vec<AssistCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    async fn respond(&self, operation: AssistOperation, title: &str, content: &str) -> Result<String> {
        self.calls.lock().unwrap().push(AssistCall {
            operation,
            title: title.to_string(),
            content: content.to_string(),
        });

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let next = {
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                None
            } else {
                Some(responses.remove(0))
            }
        };

        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Ok(match operation {
                AssistOperation::Refine => content.to_string(),
                AssistOperation::Summarize => "Mock one-sentence summary.".to_string(),
            }),
        }
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn refine(&self, title: &str, content: &str) -> Result<String> {
        self.respond(AssistOperation::Refine, title, content).await
    }

    async fn summarize(&self, title: &str, content: &str) -> Result<String> {
        self.respond(AssistOperation::Summarize, title, content).await
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock services for building a controller in tests
pub struct TestDependencies {
    pub ai: Arc<MockAI>,
    pub stream_hub: StreamHub,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            ai: Arc::new(MockAI::new()),
            stream_hub: StreamHub::new(),
        }
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Convert into ServerDeps, keeping the typed mock handle on `self`
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(self.ai.clone(), self.stream_hub.clone())
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
