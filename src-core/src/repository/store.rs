//! Store Implementations
//!
//! `FileStore` keeps the slot in a single JSON file; `MemoryStore`
//! keeps it in process. Both hold the raw JSON text, so a corrupted slot
//! behaves the same way in either.

use async_trait::async_trait;
use log::{debug, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Idea};
use super::traits::IdeaStore;

/// Decode a stored slot, falling back to an empty collection
pub(crate) fn decode_collection(raw: &str) -> Vec<Idea> {
    match serde_json::from_str::<Vec<Idea>>(raw) {
        Ok(ideas) => ideas,
        Err(e) => {
            warn!("Stored ideas are malformed, starting empty: {}", e);
            Vec::new()
        }
    }
}

/// Compact JSON, the persisted layout
pub(crate) fn encode_collection(ideas: &[Idea]) -> DomainResult<String> {
    serde_json::to_string(ideas).map_err(|e| DomainError::Persistence(e.to_string()))
}

/// File-backed store: the whole slot is one JSON file
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at `path`, usually `PlannerConfig::store_path()`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the slot on disk
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl IdeaStore for FileStore {
    async fn load(&self) -> Vec<Idea> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => decode_collection(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored ideas at {}", self.path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    async fn save(&self, ideas: &[Idea]) -> DomainResult<()> {
        let raw = encode_collection(ideas)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                DomainError::Persistence(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        // Temp file + rename so readers never see a half-written slot
        let temp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, raw)
            .await
            .map_err(|e| DomainError::Persistence(format!("Failed to write temp file: {}", e)))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Persistence(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved {} ideas to {}", ideas.len(), self.path.display());
        Ok(())
    }
}

/// In-process store holding the raw slot text
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot with arbitrary text, well-formed or not
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Current slot contents, `None` if nothing was ever written
    pub async fn raw(&self) -> Option<String> {
        self.slot.lock().await.clone()
    }
}

#[async_trait]
impl IdeaStore for MemoryStore {
    async fn load(&self) -> Vec<Idea> {
        match self.slot.lock().await.as_deref() {
            Some(raw) => decode_collection(raw),
            None => Vec::new(),
        }
    }

    async fn save(&self, ideas: &[Idea]) -> DomainResult<()> {
        let raw = encode_collection(ideas)?;
        *self.slot.lock().await = Some(raw);
        Ok(())
    }
}
