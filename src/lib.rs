//! Lineage Core - content lineage, dependency tracking, and cross-chain bridging
//!
//! In-memory engine behind the content-management view of the streaming
//! platform. Content items can be forked (cloned with a dependency snapshot),
//! drift out of sync with upstream dependencies, be synchronized, and be
//! bridged to another chain as a linked clone.
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
//!
//! Each operation reads a snapshot from the registry, computes the mutation
//! in full, and writes back in a single step. Sync writes back with a
//! compare-and-swap on the snapshot's revision, so concurrent writers get a
//! retryable [`LineageError::Conflict`] instead of a lost update.
//!
//! Status aggregation lives in [`resolver`]: a content's `unity_status` is
//! always a pure function of its dependency statuses and fork-parent state,
//! with precedence Diverged > Outdated > Synced.

pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod resolver;
pub mod services;
pub mod version;

// Re-exports
pub use config::Config;
pub use error::LineageError;
pub use model::{Content, ContentOverrides, Dependency, DependencyKind, UnityStatus};
pub use registry::{ContentRegistry, ContentSnapshot};
pub use services::{
    BridgeRequest, BridgeService, EventBus, ForkRequest, ForkService, LineageEvent, Services,
    SyncRequest, SyncService,
};
