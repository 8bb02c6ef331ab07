//! Command Handlers
//!
//! Each handler applies one operation to the collection and returns the text
//! to print: a status line followed by the re-filtered list.

mod idea;
mod scene;
mod transfer;

use anyhow::Result;
use idea_planner_lib::{filter_positions, AppState, IdeaFilter};

use crate::cli::{Command, SceneCommand};
use crate::render::render_ideas;

pub use idea::*;
pub use scene::*;
pub use transfer::*;

/// Dispatch a parsed command
pub async fn execute(state: &mut AppState, command: Command, filter: &IdeaFilter) -> Result<String> {
    match command {
        Command::List => Ok(view(state, filter)),
        Command::Add {
            title,
            description,
            tags,
            in_category,
        } => add_idea(state, &title, &description, &tags, &in_category, filter).await,
        Command::Delete { idea } => delete_idea(state, idea, filter).await,
        Command::Scene { action } => match action {
            SceneCommand::Add {
                idea,
                description,
                location,
            } => add_scene(state, idea, &description, &location, filter).await,
            SceneCommand::Toggle { idea, scene } => toggle_scene(state, idea, scene, filter).await,
            SceneCommand::Delete { idea, scene } => delete_scene(state, idea, scene, filter).await,
        },
        Command::Categories => Ok(list_categories(state)),
        Command::Export { output } => export_ideas(state, output).await,
        Command::Import { path } => import_ideas(state, &path, filter).await,
    }
}

/// Current filtered view of the collection
pub fn view(state: &AppState, filter: &IdeaFilter) -> String {
    render_ideas(&filter_positions(state.repo.ideas(), filter))
}

/// Status line plus the refreshed view
fn with_view(status: String, state: &AppState, filter: &IdeaFilter) -> String {
    format!("{}\n\n{}", status, view(state, filter))
}
