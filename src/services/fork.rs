//! Fork engine - derive a new content from a source
//!
//! A fork copies the source's dependency snapshot with every entry reset to
//! Synced, starts its own usage counters at zero, and records lineage through
//! `forked_from` / `parent_status`. Display metadata can be overridden after
//! the copy; overrides never reach dependencies or lineage fields.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use ts_rs::TS;
use uuid::Uuid;

use crate::config::Config;
use crate::error::LineageError;
use crate::model::{Content, ContentOverrides, UnityStatus};
use crate::registry::ContentRegistry;
use crate::resolver;

use super::events::{EventBus, LineageEvent};

/// Fork request from the UI layer
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ForkRequest {
    pub source_id: String,
    #[serde(default)]
    pub overrides: ContentOverrides,
}

/// Fork service
pub struct ForkService {
    registry: Arc<ContentRegistry>,
    events: Arc<EventBus>,
    config: Config,
}

impl ForkService {
    pub fn new(registry: Arc<ContentRegistry>, events: Arc<EventBus>, config: Config) -> Self {
        Self {
            registry,
            events,
            config,
        }
    }

    /// Fork a content. Validates before any write; the source is never mutated.
    pub fn fork(&self, request: &ForkRequest) -> Result<Content, LineageError> {
        self.validate(request)?;

        let source = self
            .registry
            .get(&request.source_id)
            .ok_or_else(|| {
                LineageError::Validation(format!("fork source '{}' not found", request.source_id))
            })?
            .content;

        let now = Utc::now();
        let mut fork = source.clone();
        fork.id = self.generate_id();
        fork.forked_from = Some(source.id.clone());
        fork.parent_status = Some(UnityStatus::Synced);
        fork.bridged_from = None;
        fork.bridged_at = None;
        fork.views = 0;
        fork.testimonials = Vec::new();
        fork.created_at = now;
        fork.updated_at = now;

        // Snapshot the dependency set, every entry back in sync
        for dep in &mut fork.dependencies {
            dep.status = UnityStatus::Synced;
        }

        request.overrides.apply(&mut fork);
        resolver::refresh(&mut fork);

        let inserted = self.registry.insert(fork)?;
        info!(id = %inserted.content.id, source = %source.id, "Forked content");

        self.events.emit(LineageEvent::ContentForked {
            id: inserted.content.id.clone(),
            forked_from: source.id,
            title: inserted.content.title.clone(),
        });

        Ok(inserted.content)
    }

    fn validate(&self, request: &ForkRequest) -> Result<(), LineageError> {
        if request.source_id.trim().is_empty() {
            return Err(LineageError::Validation("source id is required".into()));
        }

        if let Some(ref title) = request.overrides.title {
            if title.is_empty() {
                return Err(LineageError::Validation("title must not be empty".into()));
            }
            if title.len() > self.config.max_title_len {
                return Err(LineageError::Validation(format!(
                    "title must be <= {} characters",
                    self.config.max_title_len
                )));
            }
        }

        if let Some(ref description) = request.overrides.description {
            if description.len() > self.config.max_description_len {
                return Err(LineageError::Validation(format!(
                    "description must be <= {} characters",
                    self.config.max_description_len
                )));
            }
        }

        Ok(())
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
