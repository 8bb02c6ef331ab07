//! Domain Layer
//!
//! Contains the planning entities and the domain error type.
//! This layer has NO external dependencies (except serde and thiserror).

mod error;
mod idea;
mod scene;

#[cfg(test)]
pub(crate) mod strategies;

pub use error::{DomainError, DomainResult};
pub use idea::{parse_tags, Idea, UNCATEGORIZED};
pub use scene::Scene;

use serde::{Deserialize, Deserializer};

/// Read `null` as the field's default, like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
