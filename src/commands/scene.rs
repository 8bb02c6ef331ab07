//! Scene Commands

use anyhow::Result;
use idea_planner_lib::{AppState, IdeaFilter, SceneOperations};

use super::with_view;

pub async fn add_scene(
    state: &mut AppState,
    idea: usize,
    description: &str,
    location: &str,
    filter: &IdeaFilter,
) -> Result<String> {
    let scene = state.repo.add_scene(idea, description, location).await?;
    Ok(with_view(
        format!("Added scene {} to idea #{}", scene, idea),
        state,
        filter,
    ))
}

pub async fn toggle_scene(state: &mut AppState, idea: usize, scene: usize, filter: &IdeaFilter) -> Result<String> {
    let filmed = state.repo.toggle_scene(idea, scene).await?;
    let status = if filmed { "filmed" } else { "not filmed" };
    Ok(with_view(
        format!("Scene {} of idea #{} marked {}", scene, idea, status),
        state,
        filter,
    ))
}

pub async fn delete_scene(state: &mut AppState, idea: usize, scene: usize, filter: &IdeaFilter) -> Result<String> {
    let removed = state.repo.delete_scene(idea, scene).await?;
    Ok(with_view(
        format!("Deleted scene {} ({}) from idea #{}", scene, removed.description, idea),
        state,
        filter,
    ))
}
