//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::AppController;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, graphql_playground, health_handler, stream_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub controller: Arc<AppController>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = GraphQLContext::new(state.controller.clone());
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// CORS for the configured origins. An empty list allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Build the Axum application router around a controller.
pub fn build_app(controller: Arc<AppController>, allowed_origins: &[String]) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let app_state = AxumAppState { controller };

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        .route("/health", get(health_handler))
        .route("/api/streams/:topic", get(stream_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        // State (schema for GraphQL handlers)
        .with_state(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::AppState;
    use crate::kernel::TestDependencies;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        let deps = TestDependencies::new();
        let controller = Arc::new(AppController::new(AppState::seeded(), deps.server_deps()));
        build_app(controller, &[])
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_stream_topic_is_not_found() {
        let response = app()
            .oneshot(
                Request::get("/api/streams/everything")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_graphql_post_executes_query() {
        let body = serde_json::json!({ "query": "{ categories }" }).to_string();
        let response = app()
            .oneshot(
                Request::post("/graphql")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        // Invalid header values are dropped rather than failing startup
        let _ = cors_layer(&["https://psychesphere.dev".to_string(), "bad\norigin".to_string()]);
    }
}
