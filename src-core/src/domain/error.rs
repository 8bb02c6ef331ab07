//! Domain Layer - Errors
//!
//! Every failure here aborts a single operation; none is fatal to the process.

use thiserror::Error;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A required field was empty on add. Nothing was changed.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// A positional index did not reference an existing element.
    #[error("Out of bounds: {kind} index {index} (length {len})")]
    OutOfBounds {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    /// The import document is JSON but not an array of ideas.
    #[error("Invalid file format: {0}")]
    ImportFormat(String),

    /// The import document is not JSON at all.
    #[error("Error reading file: {0}")]
    ImportParse(String),

    /// The collection could not be encoded as an export document.
    #[error("Export failed: {0}")]
    Export(String),

    /// The store could not write the collection.
    #[error("Persistence failed: {0}")]
    Persistence(String),
}

impl DomainError {
    pub(crate) fn idea_out_of_bounds(index: usize, len: usize) -> Self {
        DomainError::OutOfBounds { kind: "idea", index, len }
    }

    pub(crate) fn scene_out_of_bounds(index: usize, len: usize) -> Self {
        DomainError::OutOfBounds { kind: "scene", index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = DomainError::scene_out_of_bounds(3, 1);
        assert_eq!(err.to_string(), "Out of bounds: scene index 3 (length 1)");
    }

    #[test]
    fn test_export_is_not_a_persistence_failure() {
        let err = DomainError::Export("bad float".to_string());
        assert_eq!(err.to_string(), "Export failed: bad float");
        assert_ne!(err, DomainError::Persistence("bad float".to_string()));
    }
}
