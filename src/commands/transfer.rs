//! Import / Export Commands
//!
//! File access happens here; the core only sees document text.

use anyhow::{Context, Result};
use idea_planner_lib::{AppState, IdeaFilter};
use std::path::{Path, PathBuf};

use super::with_view;

/// Write the full collection (ignoring any filter) as pretty JSON
pub async fn export_ideas(state: &AppState, output: Option<PathBuf>) -> Result<String> {
    let path = output.unwrap_or_else(|| PathBuf::from(&state.config.export_file_name));
    let document = state.repo.export_document()?;

    tokio::fs::write(&path, document)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("Exported {} ideas to {}", state.repo.len(), path.display());
    Ok(format!("Exported {} ideas to {}", state.repo.len(), path.display()))
}

/// Replace the collection with the contents of `path`
pub async fn import_ideas(state: &mut AppState, path: &Path, filter: &IdeaFilter) -> Result<String> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Error reading file {}", path.display()))?;

    let count = state.repo.import_document(&raw).await?;
    Ok(with_view(
        format!("Imported {} ideas from {}", count, path.display()),
        state,
        filter,
    ))
}
