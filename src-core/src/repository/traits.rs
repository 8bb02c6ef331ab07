//! Repository Layer - Core Traits
//!
//! Defines the storage contract the repository is built on.
//! Implementations can use a file, an in-memory slot, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Idea};

/// A single persistent key-value slot holding the whole idea collection.
///
/// Reads and writes are all-or-nothing; there are no partial updates.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Load the full collection.
    ///
    /// Missing data, or data that is not a JSON array of ideas, yields an
    /// empty collection. Nothing is surfaced to the caller.
    async fn load(&self) -> Vec<Idea>;

    /// Overwrite the slot with the full collection in one write.
    async fn save(&self, ideas: &[Idea]) -> DomainResult<()>;
}
