//! Unity resolver - aggregate sync status for a content item
//!
//! A content's `unity_status` is a pure function of its dependency statuses
//! plus, when present, the cached fork-parent state. Precedence is fixed:
//! Diverged > Outdated > Synced. Total over every content: an empty
//! dependency list with no parent resolves to Synced.

use crate::model::{Content, UnityStatus};

/// Compute the aggregate status without touching the content
pub fn resolve(content: &Content) -> UnityStatus {
    let statuses = content
        .dependencies
        .iter()
        .map(|dep| dep.status)
        .chain(content.parent_status);

    let mut outdated = false;
    for status in statuses {
        match status {
            UnityStatus::Diverged => return UnityStatus::Diverged,
            UnityStatus::Outdated => outdated = true,
            UnityStatus::Synced => {}
        }
    }

    if outdated {
        UnityStatus::Outdated
    } else {
        UnityStatus::Synced
    }
}

/// Resolve and store the result on the content
pub fn refresh(content: &mut Content) -> UnityStatus {
    let status = resolve(content);
    content.unity_status = status;
    status
}
