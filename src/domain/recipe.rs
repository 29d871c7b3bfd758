//! Recipe domain model
//!
//! Recipes are read-only reference data: the catalog is fixed for the
//! lifetime of the process and there are no create/update/delete
//! operations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How demanding a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A single recipe in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique within the catalog
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image URL
    pub image: String,
    /// Cook time in minutes
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub cuisine: String,
    pub category: String,
    pub calories: u32,
    /// 0-5 aggregate rating
    pub rating: f32,
    pub tags: Vec<String>,
}

impl Recipe {
    /// Case-insensitive substring match against every searchable field.
    ///
    /// A recipe matches if the query appears in its title, description,
    /// cuisine, category, any tag or any ingredient.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();

        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.cuisine.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            || self
                .ingredients
                .iter()
                .any(|ingredient| ingredient.to_lowercase().contains(&needle))
    }

    /// Case-insensitive exact tag membership, used by the dietary filter.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}
