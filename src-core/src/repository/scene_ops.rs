//! Scene Operations
//!
//! Operations on the ordered scene list of one idea, addressed by position.

use async_trait::async_trait;
use log::info;

use crate::domain::{DomainError, DomainResult, Scene};
use super::idea_repo::IdeaRepository;

/// Trait for scene operations scoped to a parent idea
#[async_trait]
pub trait SceneOperations {
    /// Append an unfilmed scene. Returns its position within the idea.
    async fn add_scene(&mut self, idea_index: usize, description: &str, location: &str) -> DomainResult<usize>;

    /// Flip the filmed flag. Returns the new value.
    async fn toggle_scene(&mut self, idea_index: usize, scene_index: usize) -> DomainResult<bool>;

    /// Remove a scene. Later scenes shift down by one.
    async fn delete_scene(&mut self, idea_index: usize, scene_index: usize) -> DomainResult<Scene>;
}

impl IdeaRepository {
    fn check_scene(&self, idea_index: usize, scene_index: usize) -> DomainResult<()> {
        self.check_idea(idea_index)?;
        let len = self.ideas[idea_index].scenes.len();
        if scene_index < len {
            Ok(())
        } else {
            Err(DomainError::scene_out_of_bounds(scene_index, len))
        }
    }
}

#[async_trait]
impl SceneOperations for IdeaRepository {
    async fn add_scene(&mut self, idea_index: usize, description: &str, location: &str) -> DomainResult<usize> {
        let description = description.trim();
        if description.is_empty() {
            return Err(DomainError::Validation("scene description must not be empty".to_string()));
        }
        self.check_idea(idea_index)?;

        let mut next = self.ideas.clone();
        let scenes = &mut next[idea_index].scenes;
        scenes.push(Scene::new(description.to_string(), location.trim().to_string()));
        let scene_index = scenes.len() - 1;
        self.commit(next).await?;

        info!("Added scene {} to idea {}", scene_index, idea_index);
        Ok(scene_index)
    }

    async fn toggle_scene(&mut self, idea_index: usize, scene_index: usize) -> DomainResult<bool> {
        self.check_scene(idea_index, scene_index)?;

        let mut next = self.ideas.clone();
        let filmed = next[idea_index].scenes[scene_index].toggle();
        self.commit(next).await?;

        info!("Scene {} of idea {} filmed = {}", scene_index, idea_index, filmed);
        Ok(filmed)
    }

    async fn delete_scene(&mut self, idea_index: usize, scene_index: usize) -> DomainResult<Scene> {
        self.check_scene(idea_index, scene_index)?;

        let mut next = self.ideas.clone();
        let removed = next[idea_index].scenes.remove(scene_index);
        self.commit(next).await?;

        info!("Deleted scene {} from idea {}", scene_index, idea_index);
        Ok(removed)
    }
}
