//! In-process pub/sub hub feeding the SSE endpoint.
//!
//! Topics are plain strings (`notifications` today). Payloads are JSON values
//! carrying a `type` field that the SSE route uses as the event name.
//!
//!   hub.publish_event(NOTIFICATIONS_TOPIC, &event).await;
//!   let rx = hub.subscribe(NOTIFICATIONS_TOPIC).await;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, RwLock};

const DEFAULT_CAPACITY: usize = 256;

/// Cloneable, topic-keyed broadcast hub.
#[derive(Clone)]
pub struct StreamHub {
    channels: Arc<RwLock<HashMap<String, broadcast::Sender<serde_json::Value>>>>,
    capacity: usize,
}

impl StreamHub {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Messages buffered per topic before slow subscribers start lagging.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            capacity,
        }
    }

    /// Publish a value. Dropped when nobody is subscribed.
    pub async fn publish(&self, topic: &str, value: serde_json::Value) {
        let channels = self.channels.read().await;
        if let Some(tx) = channels.get(topic) {
            // Err only means every receiver is gone
            let _ = tx.send(value);
        }
    }

    /// Serialize and publish a domain event.
    pub async fn publish_event<T: Serialize>(&self, topic: &str, event: &T) {
        match serde_json::to_value(event) {
            Ok(value) => self.publish(topic, value).await,
            Err(e) => tracing::warn!(error = %e, topic, "Failed to serialize stream event"),
        }
    }

    /// Subscribe to a topic, creating its channel on first use.
    pub async fn subscribe(&self, topic: &str) -> broadcast::Receiver<serde_json::Value> {
        let mut channels = self.channels.write().await;
        channels
            .entry(topic.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .subscribe()
    }

    pub async fn subscriber_count(&self, topic: &str) -> usize {
        self.channels
            .read()
            .await
            .get(topic)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }

    /// Drop channels nobody listens to any more.
    pub async fn cleanup(&self) {
        self.channels
            .write()
            .await
            .retain(|_, tx| tx.receiver_count() > 0);
    }
}

impl Default for StreamHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(tag = "type", rename_all = "snake_case")]
    enum Ping {
        Ping { n: u32 },
    }

    #[tokio::test]
    async fn test_subscribers_receive_events() {
        let hub = StreamHub::new();
        let mut first = hub.subscribe("notifications").await;
        let mut second = hub.subscribe("notifications").await;

        hub.publish_event("notifications", &Ping::Ping { n: 1 }).await;

        let expected = serde_json::json!({"type": "ping", "n": 1});
        assert_eq!(first.recv().await.unwrap(), expected);
        assert_eq!(second.recv().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_dropped() {
        let hub = StreamHub::new();
        hub.publish("notifications", serde_json::json!({"type": "ping"}))
            .await;
        assert_eq!(hub.subscriber_count("notifications").await, 0);
    }

    #[tokio::test]
    async fn test_cleanup_removes_abandoned_topics() {
        let hub = StreamHub::new();
        let rx = hub.subscribe("notifications").await;
        assert_eq!(hub.subscriber_count("notifications").await, 1);

        drop(rx);
        hub.cleanup().await;

        assert!(hub.channels.read().await.is_empty());
    }
}
