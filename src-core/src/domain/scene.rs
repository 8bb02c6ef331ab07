//! Scene Entity
//!
//! A single shot or segment planned for an idea.

use serde::{Deserialize, Serialize};

/// A planned scene. Identity is its position in the parent idea.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    /// What to film
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Where to film it (empty when unknown)
    #[serde(deserialize_with = "super::null_as_default")]
    pub location: String,
    /// Whether the scene has been filmed
    #[serde(deserialize_with = "super::null_as_default")]
    pub filmed: bool,
}

impl Scene {
    /// Create an unfilmed scene
    pub fn new(description: String, location: String) -> Self {
        Self {
            description,
            location,
            filmed: false,
        }
    }

    /// Flip the filmed flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.filmed = !self.filmed;
        self.filmed
    }

    /// `description (location)`, or just the description when there is no location
    pub fn label(&self) -> String {
        if self.location.is_empty() {
            self.description.clone()
        } else {
            format!("{} ({})", self.description, self.location)
        }
    }
}
