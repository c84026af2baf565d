//! Bridge service - clone a content onto another chain
//!
//! A bridge is a location copy, not a lineage branch: the clone keeps the
//! dependency snapshot and aggregate status verbatim and is linked back to
//! its source through `bridged_from`/`bridged_at`. Only usage counters are
//! reset. Bridging to the source's own chain is permitted and yields a
//! degenerate clone.
//!
//! No bridge protocol runs here; this is the local bookkeeping the platform
//! performs around an external transfer.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use crate::config::Config;
use crate::error::LineageError;
use crate::model::Content;
use crate::registry::ContentRegistry;

use super::events::{EventBus, LineageEvent};

/// Bridge request from the UI layer
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct BridgeRequest {
    pub content_id: String,
    pub destination_chain: String,
}

/// Bridge service
pub struct BridgeService {
    registry: Arc<ContentRegistry>,
    events: Arc<EventBus>,
    config: Config,
}

impl BridgeService {
    pub fn new(registry: Arc<ContentRegistry>, events: Arc<EventBus>, config: Config) -> Self {
        Self {
            registry,
            events,
            config,
        }
    }

    /// Bridge a content to `destination_chain`. The source is never mutated.
    pub fn bridge(&self, request: &BridgeRequest) -> Result<Content, LineageError> {
        if request.destination_chain.trim().is_empty() {
            return Err(LineageError::InvalidArgument(
                "destination chain is required".into(),
            ));
        }

        let source = self
            .registry
            .get(&request.content_id)
            .ok_or_else(|| LineageError::NotFound(request.content_id.clone()))?
            .content;

        let now = Utc::now();
        let mut clone = source.clone();
        clone.id = self.generate_id();
        clone.chain = request.destination_chain.clone();
        clone.bridged_from = Some(source.id.clone());
        clone.bridged_at = Some(now);
        clone.views = 0;
        clone.testimonials = Vec::new();
        clone.created_at = now;
        clone.updated_at = now;

        let inserted = self.registry.insert(clone)?;
        info!(
            id = %inserted.content.id,
            source = %source.id,
            chain = %inserted.content.chain,
            "Bridged content"
        );

        self.events.emit(LineageEvent::ContentBridged {
            id: inserted.content.id.clone(),
            bridged_from: source.id,
            chain: inserted.content.chain.clone(),
        });

        Ok(inserted.content)
    }

    fn generate_id(&self) -> String {
        loop {
            let id = format!("{}{}", self.config.id_prefix, Uuid::new_v4());
            if !self.registry.contains(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dependency, DependencyKind, UnityStatus};

    fn setup() -> (Arc<ContentRegistry>, BridgeService) {
        let registry = Arc::new(ContentRegistry::new());
        let events = Arc::new(EventBus::new());
        let service = BridgeService::new(registry.clone(), events, Config::default());
        (registry, service)
    }

    #[test]
    fn bridge_carries_snapshot_verbatim() {
        let (registry, service) = setup();
        let mut dep = Dependency::new("d1", "stream-api", "2.4.0", DependencyKind::Api);
        dep.status = UnityStatus::Outdated;
        let mut content =
            Content::new("c3", "Stream", "alice", "ethereum").with_dependencies(vec![dep]);
        content.unity_status = UnityStatus::Outdated;
        content.views = 100;
        content.testimonials = vec!["great".to_string()];
        registry.insert(content).unwrap();

        let bridged = service
            .bridge(&BridgeRequest {
                content_id: "c3".to_string(),
                destination_chain: "avalanche".to_string(),
            })
            .unwrap();

        assert_ne!(bridged.id, "c3");
        assert_eq!(bridged.chain, "avalanche");
        assert_eq!(bridged.bridged_from.as_deref(), Some("c3"));
        assert!(bridged.bridged_at.is_some());
        assert_eq!(bridged.views, 0);
        assert!(bridged.testimonials.is_empty());
        // Unlike fork, nothing is re-validated
        assert_eq!(bridged.dependencies[0].status, UnityStatus::Outdated);
        assert_eq!(bridged.unity_status, UnityStatus::Outdated);
    }

    #[test]
    fn bridge_does_not_mutate_source() {
        let (registry, service) = setup();
        let mut content = Content::new("c3", "Stream", "alice", "ethereum");
        content.views = 100;
        registry.insert(content).unwrap();

        service
            .bridge(&BridgeRequest {
                content_id: "c3".to_string(),
                destination_chain: "avalanche".to_string(),
            })
            .unwrap();

        let stored = registry.get("c3").unwrap().content;
        assert_eq!(stored.chain, "ethereum");
        assert_eq!(stored.views, 100);
        assert!(stored.bridged_from.is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn same_chain_bridge_is_a_degenerate_clone() {
        let (registry, service) = setup();
        registry
            .insert(Content::new("c3", "Stream", "alice", "ethereum"))
            .unwrap();

        let bridged = service
            .bridge(&BridgeRequest {
                content_id: "c3".to_string(),
                destination_chain: "ethereum".to_string(),
            })
            .unwrap();

        assert_eq!(bridged.chain, "ethereum");
        assert_eq!(bridged.bridged_from.as_deref(), Some("c3"));
    }

    #[test]
    fn empty_destination_chain_is_rejected() {
        let (registry, service) = setup();
        registry
            .insert(Content::new("c3", "Stream", "alice", "ethereum"))
            .unwrap();

        let err = service
            .bridge(&BridgeRequest {
                content_id: "c3".to_string(),
                destination_chain: "  ".to_string(),
            })
            .unwrap_err();

        assert!(matches!(err, LineageError::InvalidArgument(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn bridge_of_missing_content_is_not_found() {
        let (_registry, service) = setup();
        let err = service
            .bridge(&BridgeRequest {
                content_id: "ghost".to_string(),
                destination_chain: "avalanche".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, LineageError::NotFound(_)));
    }
}
