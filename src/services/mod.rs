//! Service layer for lineage-core
//!
//! Services encapsulate business logic between the UI layer and the content
//! registry. Each service wraps the registry with:
//! - Input validation
//! - Mutation computed on a snapshot, written back in one step
//! - Event emission for audit/notifications
//!
//! ## Architecture
//!
//! ```text
//! UI / API layer (thin)
//!     ↓
//! Service Layer (fork / sync / bridge)
//!     ↓
//! ContentRegistry (revisioned in-memory store)
//! ```

pub mod bridge;
pub mod events;
pub mod fork;
pub mod sync;

// Re-exports
pub use bridge::{BridgeRequest, BridgeService};
pub use events::{EventBus, EventListener, LineageEvent, LoggingEventListener};
pub use fork::{ForkRequest, ForkService};
pub use sync::{SyncRequest, SyncService};

use crate::config::Config;
use crate::registry::ContentRegistry;
use std::sync::Arc;

/// Service container for dependency injection
///
/// Holds all services with a shared registry and event bus.
pub struct Services {
    pub fork: Arc<ForkService>,
    pub sync: Arc<SyncService>,
    pub bridge: Arc<BridgeService>,
    pub events: Arc<EventBus>,
    pub registry: Arc<ContentRegistry>,
}

impl Services {
    /// Create all services with default configuration
    pub fn new(registry: Arc<ContentRegistry>) -> Self {
        Self::with_config(registry, Config::default())
    }

    /// Create all services with an explicit configuration
    pub fn with_config(registry: Arc<ContentRegistry>, config: Config) -> Self {
        let events = Arc::new(EventBus::with_capacity(config.event_capacity));

        Self {
            fork: Arc::new(ForkService::new(
                registry.clone(),
                events.clone(),
                config.clone(),
            )),
            sync: Arc::new(SyncService::new(registry.clone(), events.clone())),
            bridge: Arc::new(BridgeService::new(registry.clone(), events.clone(), config)),
            events,
            registry,
        }
    }
}
