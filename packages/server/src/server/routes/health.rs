use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::domains::notifications::actions::unread_count;
use crate::server::app::AxumAppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    store: StoreHealth,
    ai_assist: String,
}

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    posts: usize,
    authors: usize,
    unread_notifications: usize,
    open_editors: usize,
}

/// Health check endpoint
///
/// The store is in memory, so the service is healthy whenever it answers.
/// `ai_assist` reports "disabled" when no model key is configured.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let controller = &state.controller;

    let mut store = controller
        .read(|app| StoreHealth {
            posts: app.posts.len(),
            authors: app.authors.len(),
            unread_notifications: unread_count(app),
            open_editors: 0,
        })
        .await;
    store.open_editors = controller.open_editor_count().await;

    let ai_assist = if controller.deps().ai.is_configured() {
        "ok"
    } else {
        "disabled"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            store,
            ai_assist: ai_assist.to_string(),
        }),
    )
}
