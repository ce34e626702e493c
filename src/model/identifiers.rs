//! Meal identifier newtype with a smart constructor.
//!
//! TheMealDB identifiers are opaque strings. The only validation that
//! matters is non-emptiness, enforced at construction time so that every
//! `MealId` in the system is usable as an identity key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, unique identifier of a meal.
///
/// Identity semantics live here: two summaries with equal ids denote the
/// same meal regardless of their other fields. The raw constructor is never
/// exported, so an empty id cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MealId(String);

impl MealId {
    /// Smart constructor: rejects empty ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidMealId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidMealId::Empty);
        }
        Ok(Self(raw))
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MealId {
    type Error = InvalidMealId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<MealId> for String {
    fn from(id: MealId) -> Self {
        id.0
    }
}

/// Rejection reason from [`MealId::new`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidMealId {
    /// The identifier string was empty.
    #[error("meal id cannot be empty")]
    Empty,
}
