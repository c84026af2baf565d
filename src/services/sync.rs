//! Sync service - reconcile stale dependencies
//!
//! Sync advances every `Outdated` dependency to the next patch version and
//! marks it `Synced`; it also clears an `Outdated` fork-parent state. It
//! never touches `Diverged` entries - divergence has no automatic recovery
//! here. After updating, the aggregate status is recomputed and the result
//! written back with a revision compare-and-swap.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use ts_rs::TS;

use crate::error::LineageError;
use crate::model::{Content, UnityStatus};
use crate::registry::ContentRegistry;
use crate::resolver;
use crate::version;

use super::events::{EventBus, LineageEvent};

/// Sync request from the UI layer
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SyncRequest {
    pub content_id: String,
}

/// Sync service
pub struct SyncService {
    registry: Arc<ContentRegistry>,
    events: Arc<EventBus>,
}

impl SyncService {
    pub fn new(registry: Arc<ContentRegistry>, events: Arc<EventBus>) -> Self {
        Self { registry, events }
    }

    /// Synchronize a content's stale dependencies.
    ///
    /// The mutation is computed on a snapshot and written back in one step,
    /// so a failure (unknown id, malformed version, revision conflict)
    /// leaves the registry untouched. A content with nothing stale is a
    /// no-op and returns unchanged.
    pub fn sync(&self, request: &SyncRequest) -> Result<Content, LineageError> {
        let snapshot = self
            .registry
            .get(&request.content_id)
            .ok_or_else(|| LineageError::NotFound(request.content_id.clone()))?;

        let mut content = snapshot.content;
        let mut dependencies_updated = 0usize;
        let mut parent_cleared = false;

        for dep in &mut content.dependencies {
            if dep.status == UnityStatus::Outdated {
                dep.version = version::bump_patch(&dep.version)?;
                dep.status = UnityStatus::Synced;
                dependencies_updated += 1;
            }
        }

        if content.parent_status == Some(UnityStatus::Outdated) {
            content.parent_status = Some(UnityStatus::Synced);
            parent_cleared = true;
        }

        resolver::refresh(&mut content);

        if dependencies_updated == 0 && !parent_cleared {
            return Ok(content);
        }

        content.updated_at = Utc::now();
        let updated = self.registry.update(snapshot.revision, content)?;
        info!(
            id = %updated.content.id,
            updated = dependencies_updated,
            status = ?updated.content.unity_status,
            "Synced content"
        );

        self.events.emit(LineageEvent::ContentSynced {
            id: updated.content.id.clone(),
            dependencies_updated,
        });

        Ok(updated.content)
    }
}
