//! Import / Export
//!
//! Converts the whole collection to and from a portable JSON document.
//! Export is pure; writing the document somewhere is the caller's job.

use crate::domain::{DomainError, DomainResult, Idea};

/// Default file name offered for exports
pub const EXPORT_FILE_NAME: &str = "youtube_planner_backup.json";

/// Pretty-printed JSON (2-space indentation) of every idea
pub fn export_json(ideas: &[Idea]) -> DomainResult<String> {
    serde_json::to_string_pretty(ideas).map_err(|e| DomainError::Export(e.to_string()))
}

/// Parse an import document.
///
/// Text that is not JSON is `ImportParse`. JSON whose top level is not an
/// array, or whose elements cannot be read as ideas, is `ImportFormat`.
/// Missing fields inside an element take their defaults.
pub fn parse_import(raw: &str) -> DomainResult<Vec<Idea>> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| DomainError::ImportParse(e.to_string()))?;

    if !value.is_array() {
        return Err(DomainError::ImportFormat("expected a JSON array of ideas".to_string()));
    }

    serde_json::from_value(value).map_err(|e| DomainError::ImportFormat(e.to_string()))
}
