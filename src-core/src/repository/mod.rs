//! Repository Layer
//!
//! Storage abstraction, store implementations and the in-memory idea
//! collection that persists itself after every mutation.

mod traits;
mod store;
mod idea_repo;
mod scene_ops;


pub use traits::IdeaStore;
pub use store::{FileStore, MemoryStore};
pub use idea_repo::IdeaRepository;
pub use scene_ops::SceneOperations;
