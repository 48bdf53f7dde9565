//! SSE streaming endpoint.
//!
//! GET /api/streams/:topic
//!
//! Subscribes to the StreamHub by topic and forwards each JSON value as an SSE
//! event named after its `type` field. The only topic today is
//! `notifications`, which carries `notification_created` events.

use std::convert::Infallible;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, StreamExt};
use tokio_stream::wrappers::BroadcastStream;
use tracing::debug;

use crate::domains::notifications::NOTIFICATIONS_TOPIC;
use crate::server::app::AxumAppState;

/// Topics a client may subscribe to.
pub const STREAM_TOPICS: &[&str] = &[NOTIFICATIONS_TOPIC];

/// SSE stream handler. Unknown topics are rejected with 404.
pub async fn stream_handler(
    Extension(state): Extension<AxumAppState>,
    Path(topic): Path<String>,
) -> Result<Sse<impl futures::Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    if !STREAM_TOPICS.contains(&topic.as_str()) {
        return Err(StatusCode::NOT_FOUND);
    }

    let rx = state.controller.deps().stream_hub.subscribe(&topic).await;
    debug!(topic = %topic, "Stream subscriber connected");

    // Stream with connected event and lag handling
    let connected =
        stream::once(async { Ok::<_, Infallible>(Event::default().event("connected").data("ok")) });

    let events = BroadcastStream::new(rx).filter_map(|result| async {
        match result {
            Ok(value) => {
                let event_name = value
                    .get("type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("message");
                Event::default()
                    .event(event_name)
                    .json_data(&value)
                    .ok()
                    .map(Ok)
            }
            Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
                Event::default()
                    .event("lagged")
                    .json_data(serde_json::json!({"missed": n}))
                    .ok()
                    .map(Ok)
            }
        }
    });

    Ok(Sse::new(connected.chain(events)).keep_alive(KeepAlive::default()))
}
