//! Idea Repository - Core Operations
//!
//! Owns the ordered idea collection and persists all of it through the
//! injected store after every mutation. Scene operations live in
//! `scene_ops`.
//!
//! Mutations are applied to a copy that only replaces the live collection
//! once the store accepted it, so a failed save leaves memory untouched.

use log::{info, warn};
use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, Idea};
use crate::transfer;
use super::traits::IdeaStore;

/// In-memory idea collection backed by an `IdeaStore`
pub struct IdeaRepository {
    pub(super) ideas: Vec<Idea>,
    pub(super) store: Arc<dyn IdeaStore>,
}

impl IdeaRepository {
    /// Load the collection from `store`
    pub async fn open(store: Arc<dyn IdeaStore>) -> Self {
        let ideas = store.load().await;
        info!("Loaded {} ideas", ideas.len());
        Self { ideas, store }
    }

    /// All ideas in order
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn get(&self, index: usize) -> Option<&Idea> {
        self.ideas.get(index)
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    /// Distinct non-empty categories in first-appearance order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for idea in &self.ideas {
            let category = idea.category.as_str();
            if !category.is_empty() && !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Append a new idea with no scenes. Returns its position.
    ///
    /// Title and description are trimmed and must be non-empty; tags are
    /// trimmed and empty ones dropped. The category is kept verbatim.
    pub async fn add_idea(
        &mut self,
        title: &str,
        description: &str,
        tags: Vec<String>,
        category: &str,
    ) -> DomainResult<usize> {
        let title = title.trim();
        let description = description.trim();
        if title.is_empty() {
            return Err(DomainError::Validation("title must not be empty".to_string()));
        }
        if description.is_empty() {
            return Err(DomainError::Validation("description must not be empty".to_string()));
        }

        let tags = tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        let idea = Idea::new(title.to_string(), description.to_string(), tags, category.to_string());

        let mut next = self.ideas.clone();
        next.push(idea);
        self.commit(next).await?;

        let index = self.ideas.len() - 1;
        info!("Added idea {} ({})", index, title);
        Ok(index)
    }

    /// Remove the idea at `index`. Later ideas shift down by one.
    pub async fn delete_idea(&mut self, index: usize) -> DomainResult<Idea> {
        self.check_idea(index)?;

        let mut next = self.ideas.clone();
        let removed = next.remove(index);
        self.commit(next).await?;

        info!("Deleted idea {} ({})", index, removed.title);
        Ok(removed)
    }

    /// Replace the whole collection, then persist it
    pub async fn replace_all(&mut self, ideas: Vec<Idea>) -> DomainResult<()> {
        self.commit(ideas).await
    }

    /// Replace the collection from an import document. Returns the new length.
    ///
    /// The collection is untouched when the document is rejected.
    pub async fn import_document(&mut self, raw: &str) -> DomainResult<usize> {
        let ideas = match transfer::parse_import(raw) {
            Ok(ideas) => ideas,
            Err(e) => {
                warn!("Import rejected: {}", e);
                return Err(e);
            }
        };
        self.replace_all(ideas).await?;
        info!("Imported {} ideas", self.ideas.len());
        Ok(self.ideas.len())
    }

    /// Pretty JSON of the full collection (never a filtered view)
    pub fn export_document(&self) -> DomainResult<String> {
        transfer::export_json(&self.ideas)
    }

    pub(super) fn check_idea(&self, index: usize) -> DomainResult<()> {
        if index < self.ideas.len() {
            Ok(())
        } else {
            Err(DomainError::idea_out_of_bounds(index, self.ideas.len()))
        }
    }

    /// Persist `next` and make it the live collection
    pub(super) async fn commit(&mut self, next: Vec<Idea>) -> DomainResult<()> {
        self.store.save(&next).await?;
        self.ideas = next;
        Ok(())
    }
}
