//! Event system for lineage operations
//!
//! Broadcast bus notifying listeners about fork/sync/bridge outcomes.
//! Stands in for the UI-framework event emitters the original view used;
//! useful for audit logging, cache invalidation, and real-time dashboards.

use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, trace};

/// Events emitted by the lineage services
#[derive(Debug, Clone)]
pub enum LineageEvent {
    ContentForked {
        id: String,
        forked_from: String,
        title: String,
    },
    ContentSynced {
        id: String,
        dependencies_updated: usize,
    },
    ContentBridged {
        id: String,
        bridged_from: String,
        chain: String,
    },
}

/// Trait for event listeners
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &LineageEvent);
}

/// Event bus for broadcasting lineage events
pub struct EventBus {
    sender: broadcast::Sender<LineageEvent>,
}

impl EventBus {
    /// Create a new event bus with default capacity
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create a new event bus with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emit an event to all subscribers
    pub fn emit(&self, event: LineageEvent) {
        trace!(event = ?event, "Emitting lineage event");
        // Ignore send errors (no subscribers)
        let _ = self.sender.send(event);
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<LineageEvent> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Logging event listener for audit trails
pub struct LoggingEventListener;

impl EventListener for LoggingEventListener {
    fn on_event(&self, event: &LineageEvent) {
        match event {
            LineageEvent::ContentForked {
                id, forked_from, ..
            } => {
                debug!(id = %id, forked_from = %forked_from, "Content forked");
            }
            LineageEvent::ContentSynced {
                id,
                dependencies_updated,
            } => {
                debug!(id = %id, updated = dependencies_updated, "Content synced");
            }
            LineageEvent::ContentBridged {
                id,
                bridged_from,
                chain,
            } => {
                debug!(id = %id, bridged_from = %bridged_from, chain = %chain, "Content bridged");
            }
        }
    }
}

/// Spawn a background task that logs all events
pub fn spawn_logging_listener(event_bus: Arc<EventBus>) -> tokio::task::JoinHandle<()> {
    let mut receiver = event_bus.subscribe();
    let listener = LoggingEventListener;

    tokio::spawn(async move {
        loop {
            match receiver.recv().await {
                Ok(event) => listener.on_event(&event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    debug!(skipped = n, "Event listener lagged, skipped events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("Event bus closed, stopping listener");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emit_reaches_subscriber() {
        let bus = EventBus::new();
        let mut receiver = bus.subscribe();

        bus.emit(LineageEvent::ContentForked {
            id: "c2".to_string(),
            forked_from: "c1".to_string(),
            title: "Fork".to_string(),
        });

        let event = receiver.recv().await.unwrap();
        assert!(matches!(event, LineageEvent::ContentForked { ref id, .. } if id == "c2"));
    }

    #[test]
    fn emit_without_subscribers_is_fine() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);
        bus.emit(LineageEvent::ContentSynced {
            id: "c1".to_string(),
            dependencies_updated: 0,
        });
    }
}
