//! Filter Engine
//!
//! Derives the visible ideas from a search term and a category selection.
//! A linear, order-preserving scan; recompute after every change.

use crate::domain::Idea;

/// Search and category selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdeaFilter {
    /// Lower-cased search term
    term: String,
    /// Selected category; `None` lets every category through
    category: Option<String>,
}

impl IdeaFilter {
    /// An empty `category` counts as no selection
    pub fn new(search: &str, category: Option<&str>) -> Self {
        Self {
            term: search.to_lowercase(),
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
        }
    }

    /// Filter that lets everything through
    pub fn all() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on title, description or any tag,
    /// plus exact category match when one is selected
    pub fn matches(&self, idea: &Idea) -> bool {
        let text_match = idea.title.to_lowercase().contains(&self.term)
            || idea.description.to_lowercase().contains(&self.term)
            || idea.tags.iter().any(|tag| tag.to_lowercase().contains(&self.term));

        let category_match = match &self.category {
            Some(category) => idea.category == *category,
            None => true,
        };

        text_match && category_match
    }
}

/// Matching ideas, in collection order
pub fn filter_ideas<'a>(ideas: &'a [Idea], filter: &IdeaFilter) -> Vec<&'a Idea> {
    ideas.iter().filter(|idea| filter.matches(idea)).collect()
}

/// Matching ideas with their position in the full collection.
///
/// Front-ends address mutations by these positions, not by the position
/// within the filtered list.
pub fn filter_positions<'a>(ideas: &'a [Idea], filter: &IdeaFilter) -> Vec<(usize, &'a Idea)> {
    ideas
        .iter()
        .enumerate()
        .filter(|(_, idea)| filter.matches(idea))
        .collect()
}
