//! Test harness for integration testing.
//!
//! Every test gets its own controller over a freshly seeded store, wired to a
//! scripted `MockAI` and an in-process stream hub.

use std::sync::Arc;

use psyche_core::common::AppState;
use psyche_core::kernel::{AppController, MockAI, StreamHub, TestDependencies};
use test_context::AsyncTestContext;

use super::GraphQLClient;

/// Test harness that owns the controller and its mock dependencies.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.graphql();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub controller: Arc<AppController>,
    /// Typed handle on the AI mock, for inspecting calls
    pub ai: Arc<MockAI>,
    pub stream_hub: StreamHub,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_ai(MockAI::new())
    }

    /// Harness whose AI answers from the given mock.
    pub fn with_ai(ai: MockAI) -> Self {
        // Respect RUST_LOG; run with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let deps = TestDependencies::new().mock_ai(ai);
        let controller = Arc::new(AppController::new(AppState::seeded(), deps.server_deps()));

        Self {
            controller,
            ai: deps.ai.clone(),
            stream_hub: deps.stream_hub.clone(),
        }
    }

    /// Get a GraphQL client for this harness.
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.controller.clone())
    }

    pub async fn state(&self) -> AppState {
        self.controller.snapshot().await
    }
}
