//! User domain model
//!
//! A registered user together with the per-user state the application
//! tracks: search history, favorite recipes and saved recipes. The struct
//! serializes with camelCase field names to preserve the on-disk JSON
//! layout of the user directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of entries kept in a user's search history.
pub const SEARCH_HISTORY_LIMIT: usize = 10;

/// A registered user of the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned at registration, immutable afterwards
    pub id: Uuid,
    /// Unique login identifier within the directory (exact-match key)
    pub email: String,
    pub name: String,
    /// Optional data-URI image; removable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Most-recent-first, de-duplicated, capped at [SEARCH_HISTORY_LIMIT]
    #[serde(default)]
    pub search_history: Vec<String>,
    /// Recipe ids with set semantics (no duplicates)
    #[serde(default)]
    pub favorite_recipes: Vec<String>,
    /// Recipe ids with set semantics (no duplicates)
    #[serde(default)]
    pub saved_recipes: Vec<String>,
}

impl User {
    /// Create a new user with empty collections
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            name: name.into(),
            profile_picture: None,
            created_at: Utc::now(),
            search_history: Vec::new(),
            favorite_recipes: Vec::new(),
            saved_recipes: Vec::new(),
        }
    }

    /// Add a recipe to the favorites set.
    ///
    /// Returns `true` if the set changed; adding an id that is already
    /// present is a no-op.
    pub fn add_favorite(&mut self, recipe_id: &str) -> bool {
        add_to_set(&mut self.favorite_recipes, recipe_id)
    }

    /// Remove a recipe from the favorites set.
    ///
    /// Returns `true` if the set changed; removing an absent id is a no-op.
    pub fn remove_favorite(&mut self, recipe_id: &str) -> bool {
        remove_from_set(&mut self.favorite_recipes, recipe_id)
    }

    /// Add a recipe to the saved set. Same semantics as [User::add_favorite].
    pub fn add_saved(&mut self, recipe_id: &str) -> bool {
        add_to_set(&mut self.saved_recipes, recipe_id)
    }

    /// Remove a recipe from the saved set. Same semantics as
    /// [User::remove_favorite].
    pub fn remove_saved(&mut self, recipe_id: &str) -> bool {
        remove_from_set(&mut self.saved_recipes, recipe_id)
    }

    /// Record a search query at the front of the history.
    ///
    /// Blank and whitespace-only queries are ignored. Re-issuing a query
    /// moves the existing entry to the front instead of duplicating it, and
    /// the history is truncated to the [SEARCH_HISTORY_LIMIT] most recent
    /// entries. Returns `true` if the history changed.
    pub fn push_search_query(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        self.search_history.retain(|entry| entry != query);
        self.search_history.insert(0, query.to_string());
        self.search_history.truncate(SEARCH_HISTORY_LIMIT);
        true
    }
}

fn add_to_set(ids: &mut Vec<String>, id: &str) -> bool {
    if ids.iter().any(|existing| existing == id) {
        return false;
    }
    ids.push(id.to_string());
    true
}

fn remove_from_set(ids: &mut Vec<String>, id: &str) -> bool {
    let before = ids.len();
    ids.retain(|existing| existing != id);
    ids.len() != before
}
