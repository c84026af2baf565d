//! Content registry - revisioned in-memory store
//!
//! Single source of truth for content entities. Replaces the source UI's
//! reactive array with a keyed repository: reads hand out cloned snapshots
//! carrying the revision observed, and writes go back through a
//! compare-and-swap on that revision so a concurrently-mutated content is
//! rejected with a retryable conflict instead of silently overwritten.
//!
//! Content is never deleted; fork and bridge insert, sync updates.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::error::LineageError;
use crate::model::Content;

/// A content together with the registry revision it was read at
#[derive(Debug, Clone)]
pub struct ContentSnapshot {
    pub revision: u64,
    pub content: Content,
}

#[derive(Debug, Clone)]
struct Versioned {
    revision: u64,
    content: Content,
}

/// In-memory content store keyed by content id
#[derive(Debug, Default)]
pub struct ContentRegistry {
    entries: DashMap<String, Versioned>,
}

impl ContentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of a content by id
    pub fn get(&self, id: &str) -> Option<ContentSnapshot> {
        self.entries.get(id).map(|entry| ContentSnapshot {
            revision: entry.revision,
            content: entry.content.clone(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Insert a new content. The id must not already be present.
    pub fn insert(&self, content: Content) -> Result<ContentSnapshot, LineageError> {
        let id = content.id.clone();
        match self.entries.entry(id.clone()) {
            Entry::Occupied(_) => Err(LineageError::Validation(format!(
                "content '{id}' already exists"
            ))),
            Entry::Vacant(slot) => {
                debug!(id = %id, chain = %content.chain, "Registered content");
                let versioned = Versioned {
                    revision: 1,
                    content,
                };
                let snapshot = ContentSnapshot {
                    revision: versioned.revision,
                    content: versioned.content.clone(),
                };
                slot.insert(versioned);
                Ok(snapshot)
            }
        }
    }

    /// Replace a content, guarded by the revision the caller read.
    ///
    /// Fails with [`LineageError::Conflict`] if the stored revision no longer
    /// matches `expected_revision`; the caller re-reads and retries.
    pub fn update(
        &self,
        expected_revision: u64,
        content: Content,
    ) -> Result<ContentSnapshot, LineageError> {
        let id = content.id.clone();
        let mut entry = self
            .entries
            .get_mut(&id)
            .ok_or_else(|| LineageError::NotFound(id.clone()))?;

        if entry.revision != expected_revision {
            return Err(LineageError::Conflict {
                id,
                expected: expected_revision,
                actual: entry.revision,
            });
        }

        entry.revision += 1;
        entry.content = content;
        debug!(id = %id, revision = entry.revision, "Updated content");
        Ok(ContentSnapshot {
            revision: entry.revision,
            content: entry.content.clone(),
        })
    }

    /// Snapshot every content, unordered
    pub fn list(&self) -> Vec<ContentSnapshot> {
        self.entries
            .iter()
            .map(|entry| ContentSnapshot {
                revision: entry.revision,
                content: entry.content.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_get_round_trips() {
        let registry = ContentRegistry::new();
        let content = Content::new("c1", "Genesis", "alice", "ethereum");
        let inserted = registry.insert(content).unwrap();
        assert_eq!(inserted.revision, 1);

        let snapshot = registry.get("c1").unwrap();
        assert_eq!(snapshot.content.title, "Genesis");
        assert_eq!(snapshot.revision, 1);
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let registry = ContentRegistry::new();
        registry
            .insert(Content::new("c1", "Genesis", "alice", "ethereum"))
            .unwrap();
        let err = registry
            .insert(Content::new("c1", "Copy", "bob", "polygon"))
            .unwrap_err();
        assert!(matches!(err, LineageError::Validation(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn update_bumps_revision() {
        let registry = ContentRegistry::new();
        let snap = registry
            .insert(Content::new("c1", "Genesis", "alice", "ethereum"))
            .unwrap();

        let mut modified = snap.content.clone();
        modified.views = 7;
        let updated = registry.update(snap.revision, modified).unwrap();
        assert_eq!(updated.revision, 2);
        assert_eq!(registry.get("c1").unwrap().content.views, 7);
    }

    #[test]
    fn stale_revision_conflicts() {
        let registry = ContentRegistry::new();
        let snap = registry
            .insert(Content::new("c1", "Genesis", "alice", "ethereum"))
            .unwrap();

        registry.update(snap.revision, snap.content.clone()).unwrap();

        // Second writer still holds revision 1
        let err = registry.update(snap.revision, snap.content).unwrap_err();
        assert!(matches!(err, LineageError::Conflict { expected: 1, actual: 2, .. }));
    }

    #[test]
    fn update_of_missing_content_is_not_found() {
        let registry = ContentRegistry::new();
        let err = registry
            .update(1, Content::new("ghost", "Ghost", "nobody", "ethereum"))
            .unwrap_err();
        assert!(matches!(err, LineageError::NotFound(_)));
    }
}
