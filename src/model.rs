//! Domain model for content lineage
//!
//! Wire shape is camelCase to match the UI payloads. TypeScript types are
//! auto-generated via ts-rs. Run:
//!   cargo test export_bindings
//! Generated files go to: bindings/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Aggregate or per-dependency sync state.
///
/// Closed set so the resolver's precedence logic is exhaustive. Precedence
/// when aggregating: Diverged > Outdated > Synced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum UnityStatus {
    Synced,
    Outdated,
    Diverged,
}

/// Kind of external reference a dependency points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DependencyKind {
    #[serde(rename = "API")]
    Api,
    Library,
    Protocol,
}

/// One external reference tracked by a content item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Dependency {
    pub id: String,
    pub name: String,
    /// Dotted numeric version, e.g. "1.1.0"
    pub version: String,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
    pub status: UnityStatus,
}

impl Dependency {
    /// New dependency, initially in sync with upstream
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        kind: DependencyKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            kind,
            status: UnityStatus::Synced,
        }
    }
}

/// A streamable item tracked with lineage and dependency metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Content {
    pub id: String,
    pub title: String,
    pub creator: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Delivery protocol variant tag, e.g. "standard" or "enhanced".
    /// Copied through fork/bridge, never interpreted here.
    pub protocol: String,
    /// Ledger this instance is associated with
    pub chain: String,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    /// Derived aggregate state; written only by the resolver
    pub unity_status: UnityStatus,
    /// Id of the fork parent; absent for originals
    #[serde(default)]
    pub forked_from: Option<String>,
    /// Cached sync state of the relationship to the fork parent
    #[serde(default)]
    pub parent_status: Option<UnityStatus>,
    /// Present only on bridge-produced clones
    #[serde(default)]
    pub bridged_from: Option<String>,
    #[serde(default)]
    pub bridged_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub testimonials: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Content {
    /// New original content (publish path), empty dependency set
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        creator: impl Into<String>,
        chain: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            creator: creator.into(),
            description: None,
            protocol: "standard".to_string(),
            chain: chain.into(),
            dependencies: Vec::new(),
            unity_status: UnityStatus::Synced,
            forked_from: None,
            parent_status: None,
            bridged_from: None,
            bridged_at: None,
            views: 0,
            testimonials: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<Dependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = protocol.into();
        self
    }
}

/// Display-metadata overrides applied to a forked content after the copy.
///
/// Lineage fields and the dependency snapshot are never override targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ContentOverrides {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
}

impl ContentOverrides {
    /// Apply the set fields to `content`
    pub fn apply(&self, content: &mut Content) {
        if let Some(ref title) = self.title {
            content.title = title.clone();
        }
        if let Some(ref description) = self.description {
            content.description = Some(description.clone());
        }
        if let Some(ref creator) = self.creator {
            content.creator = creator.clone();
        }
        if let Some(ref protocol) = self.protocol {
            content.protocol = protocol.clone();
        }
        if let Some(ref chain) = self.chain {
            content.chain = chain.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&DependencyKind::Api).unwrap(),
            r#""API""#
        );
        assert_eq!(
            serde_json::to_string(&DependencyKind::Library).unwrap(),
            r#""Library""#
        );
    }

    #[test]
    fn content_serializes_camel_case() {
        let content = Content::new("c1", "Genesis Stream", "alice", "ethereum");
        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["unityStatus"], "Synced");
        assert!(json.get("forkedFrom").is_some());
        assert!(json.get("unity_status").is_none());
    }

    #[test]
    fn overrides_never_touch_lineage() {
        let mut content = Content::new("c1", "Original", "alice", "ethereum");
        content.forked_from = Some("c0".to_string());
        let overrides = ContentOverrides {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        overrides.apply(&mut content);
        assert_eq!(content.title, "Renamed");
        assert_eq!(content.forked_from.as_deref(), Some("c0"));
        assert_eq!(content.creator, "alice");
    }
}
