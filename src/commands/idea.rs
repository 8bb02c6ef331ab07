//! Idea Commands

use anyhow::Result;
use idea_planner_lib::{parse_tags, AppState, IdeaFilter};

use super::with_view;
use crate::render::render_categories;

/// Create an idea from raw form input; `tags` is comma-separated
pub async fn add_idea(
    state: &mut AppState,
    title: &str,
    description: &str,
    tags: &str,
    category: &str,
    filter: &IdeaFilter,
) -> Result<String> {
    let index = state
        .repo
        .add_idea(title, description, parse_tags(tags), category)
        .await?;
    Ok(with_view(format!("Added idea #{}", index), state, filter))
}

pub async fn delete_idea(state: &mut AppState, index: usize, filter: &IdeaFilter) -> Result<String> {
    let removed = state.repo.delete_idea(index).await?;
    Ok(with_view(
        format!("Deleted idea #{} ({})", index, removed.title),
        state,
        filter,
    ))
}

pub fn list_categories(state: &AppState) -> String {
    render_categories(&state.repo.categories())
}
