//! Idea Entity
//!
//! A top-level planning record. Ideas carry metadata and an ordered list of
//! scenes; identity is the position in the collection, there is no ID field.

use serde::{Deserialize, Serialize};

use super::scene::Scene;

/// Display name for ideas without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A content idea with its planned scenes
///
/// Field order matches the persisted and exported JSON layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Idea {
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub tags: Vec<String>,
    /// May be empty
    #[serde(deserialize_with = "super::null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub scenes: Vec<Scene>,
}

impl Idea {
    /// Create an idea with no scenes
    pub fn new(title: String, description: String, tags: Vec<String>, category: String) -> Self {
        Self {
            title,
            description,
            tags,
            category,
            scenes: Vec::new(),
        }
    }

    /// Category for display; empty categories show as `Uncategorized`
    pub fn display_category(&self) -> &str {
        if self.category.is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    /// Number of scenes already filmed
    pub fn filmed_count(&self) -> usize {
        self.scenes.iter().filter(|s| s.filmed).count()
    }
}

/// Split comma-separated tag input, trimming each tag and dropping empties
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_creation() {
        let idea = Idea::new(
            "Vlog".to_string(),
            "Daily life".to_string(),
            vec!["life".to_string()],
            "Vlog".to_string(),
        );
        assert_eq!(idea.title, "Vlog");
        assert!(idea.scenes.is_empty());
        assert_eq!(idea.filmed_count(), 0);
    }

    #[test]
    fn test_display_category() {
        let mut idea = Idea::new("t".into(), "d".into(), vec![], String::new());
        assert_eq!(idea.display_category(), UNCATEGORIZED);
        idea.category = "Tutorial".into();
        assert_eq!(idea.display_category(), "Tutorial");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" rust, cli ,,  "), vec!["rust", "cli"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let idea: Idea = serde_json::from_str(
            r#"{"title":"a","description":null,"tags":null,"category":null,"scenes":null}"#,
        )
        .unwrap();
        assert_eq!(idea.title, "a");
        assert_eq!(idea.description, "");
        assert!(idea.tags.is_empty());
        assert_eq!(idea.category, "");
        assert!(idea.scenes.is_empty());
    }

    #[test]
    fn test_serialized_field_order() {
        let idea = Idea::new("a".into(), "b".into(), vec!["t".into()], "c".into());
        let json = serde_json::to_string(&idea).unwrap();
        assert_eq!(
            json,
            r#"{"title":"a","description":"b","tags":["t"],"category":"c","scenes":[]}"#
        );
    }
}
