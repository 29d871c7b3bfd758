//! Search service - the filter/sort pipeline over catalog hits
//!
//! The catalog produces raw text-match results in catalog order
//! ("relevance"); this service narrows them with the optional filters and
//! applies the sort stage. Sorting is stable throughout: recipes that
//! compare equal keep their relative catalog order.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::adapters::RecipeCatalog;
use crate::domain::{Difficulty, Recipe, User};

/// How to order a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog order, i.e. leave the results as they are
    #[default]
    Relevance,
    /// Highest rated first
    Rating,
    /// Shortest cook time first
    CookTime,
    /// Fewest calories first
    Calories,
}

/// Difficulty narrowing applied on top of the text match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    fn keeps(&self, recipe: &Recipe) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(difficulty) => recipe.difficulty == *difficulty,
        }
    }
}

/// Optional narrowing criteria, ANDed onto the text match
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Exact cuisine match (case-insensitive)
    pub cuisine: Option<String>,
    /// Dietary tag the recipe must carry (e.g. "vegetarian")
    pub dietary: Option<String>,
    pub difficulty: DifficultyFilter,
}

/// A completed search: the executed query plus its results and timing
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<Recipe>,
    pub total_results: usize,
    pub search_time: Duration,
    pub timestamp: DateTime<Utc>,
}

/// Free-text search over the catalog with filtering and sorting
pub struct SearchService {
    catalog: Arc<RecipeCatalog>,
}

impl SearchService {
    pub fn new(catalog: Arc<RecipeCatalog>) -> Self {
        Self { catalog }
    }

    /// Run a search.
    ///
    /// A blank query yields an empty result set regardless of filters; the
    /// "browse everything" surface reads the catalog directly instead of
    /// searching for nothing.
    pub fn search(&self, query: &str, filters: &SearchFilters, sort: SortKey) -> SearchOutcome {
        let started = Instant::now();
        let query = query.trim();

        let mut results = self.catalog.search(query);
        results.retain(|recipe| {
            let cuisine_ok = filters
                .cuisine
                .as_deref()
                .map(|cuisine| recipe.cuisine.eq_ignore_ascii_case(cuisine))
                .unwrap_or(true);
            let dietary_ok = filters
                .dietary
                .as_deref()
                .map(|tag| recipe.has_tag(tag))
                .unwrap_or(true);

            cuisine_ok && dietary_ok && filters.difficulty.keeps(recipe)
        });
        sort_recipes(&mut results, sort);

        tracing::debug!(%query, results = results.len(), "search executed");

        SearchOutcome {
            query: query.to_string(),
            total_results: results.len(),
            search_time: started.elapsed(),
            timestamp: Utc::now(),
            results,
        }
    }

    /// The user's favorite recipes, resolved against the catalog. Ids with
    /// no catalog entry are omitted.
    pub fn favorites(&self, user: &User) -> Vec<Recipe> {
        self.catalog.resolve_ids(&user.favorite_recipes)
    }

    /// The user's saved recipes, resolved against the catalog.
    pub fn saved(&self, user: &User) -> Vec<Recipe> {
        self.catalog.resolve_ids(&user.saved_recipes)
    }
}

/// Reorder `recipes` in place according to `key`.
///
/// The sort is stable: recipes with equal keys keep their relative order,
/// and [SortKey::Relevance] leaves the sequence untouched.
pub fn sort_recipes(recipes: &mut [Recipe], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Rating => recipes.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
        }),
        SortKey::CookTime => recipes.sort_by_key(|recipe| recipe.cook_time),
        SortKey::Calories => recipes.sort_by_key(|recipe| recipe.calories),
    }
}
