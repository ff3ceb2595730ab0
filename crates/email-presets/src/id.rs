//! Entity identifiers and the sources that allocate them.
//!
//! Every entity in a tree carries an opaque string id. Ids are drawn from an
//! [`IdSource`] at construction time; the builders never reuse or derive ids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Opaque identifier of a single canvas entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Allocator of fresh entity ids.
///
/// Implementations must return a different id on every call. They take
/// `&self` and must be thread-safe so one source can be shared by every
/// builder in a tree.
pub trait IdSource: Send + Sync {
    /// Returns a fresh, never-before-returned identifier.
    fn next_id(&self) -> EntityId;
}

/// Random UUID v4 ids. Used by [`EmailPreset::build`](crate::EmailPreset::build).
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self) -> EntityId {
        EntityId(Uuid::new_v4().to_string())
    }
}

/// Deterministic `prefix-N` ids counting up from 1.
///
/// Two fresh sources with the same prefix produce identical trees, which makes
/// exported JSON reproducible.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    /// Creates a source whose first id is `{prefix}-1`.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        log::trace!("New sequential id source with prefix {prefix:?}");
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("entity")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> EntityId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        EntityId(format!("{}-{}", self.prefix, n))
    }
}
