//! Idea Planner Core
//!
//! Layered architecture:
//! - domain: Ideas, scenes and the domain error type
//! - repository: Store abstraction and the self-persisting idea collection
//! - filter: Search / category filtering
//! - transfer: JSON import and export
//! - config: Application configuration

use std::sync::Arc;

pub mod config;
pub mod domain;
pub mod filter;
pub mod repository;
pub mod transfer;

pub use config::{ConfigError, PlannerConfig};
pub use domain::{parse_tags, DomainError, DomainResult, Idea, Scene, UNCATEGORIZED};
pub use filter::{filter_ideas, filter_positions, IdeaFilter};
pub use repository::{FileStore, IdeaRepository, IdeaStore, MemoryStore, SceneOperations};
pub use transfer::{export_json, parse_import, EXPORT_FILE_NAME};

/// Application state shared by front-end commands
pub struct AppState {
    pub repo: IdeaRepository,
    pub config: PlannerConfig,
}

impl AppState {
    /// Open the file-backed collection described by `config`
    pub async fn open(config: PlannerConfig) -> Self {
        let store = Arc::new(FileStore::new(config.store_path()));
        log::info!("Opening idea store at {}", store.path().display());
        let repo = IdeaRepository::open(store).await;
        Self { repo, config }
    }
}
