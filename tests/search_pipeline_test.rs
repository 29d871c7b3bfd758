//! Integration tests for the search and suggestion pipeline
//!
//! Covers the filter/sort contract over the built-in catalog and the
//! debounce/cancellation behavior of the suggestion engine. Timing tests
//! run on tokio's paused clock, so no test actually waits.
//!
//! Run with: cargo test --test search_pipeline_test -- --nocapture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use tastebook_core::adapters::{CatalogSuggestionSource, RecipeCatalog, MAX_SUGGESTIONS};
use tastebook_core::domain::result::Result;
use tastebook_core::ports::SuggestionSource;
use tastebook_core::services::{
    sort_recipes, DifficultyFilter, FetchOutcome, SearchFilters, SearchService, SortKey,
    SuggestionService,
};
use tastebook_core::{Difficulty, Recipe};

// ============================================================================
// Test Helpers
// ============================================================================

fn search_service() -> SearchService {
    SearchService::new(Arc::new(RecipeCatalog::builtin()))
}

fn suggestion_service(debounce_ms: u64, fetch_delay_ms: u64) -> Arc<SuggestionService> {
    let catalog = Arc::new(RecipeCatalog::builtin());
    let source = Arc::new(CatalogSuggestionSource::new(
        catalog.clone(),
        Duration::from_millis(fetch_delay_ms),
    ));
    Arc::new(SuggestionService::new(
        catalog,
        source,
        Duration::from_millis(debounce_ms),
    ))
}

fn ids(recipes: &[Recipe]) -> Vec<&str> {
    recipes.iter().map(|recipe| recipe.id.as_str()).collect()
}

/// A minimal recipe for sort-stability fixtures
fn test_recipe(id: &str, rating: f32, cook_time: u32, calories: u32) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: format!("Recipe {id}"),
        description: "A test recipe".to_string(),
        image: String::new(),
        cook_time,
        servings: 2,
        difficulty: Difficulty::Easy,
        ingredients: vec!["Water".to_string()],
        instructions: vec!["Boil".to_string()],
        cuisine: "Test".to_string(),
        category: "Test".to_string(),
        calories,
        rating,
        tags: vec!["test".to_string()],
    }
}

/// A [SuggestionSource] that counts how often it is consulted
struct CountingSource {
    calls: AtomicUsize,
}

impl CountingSource {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SuggestionSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    async fn fetch(&self, query: &str) -> Result<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![query.to_string()])
    }
}

// ============================================================================
// Search Correctness
// ============================================================================

#[test]
fn test_tag_substring_search_returns_exact_match_set() {
    let outcome = search_service().search("salad", &SearchFilters::default(), SortKey::Relevance);

    // Caesar Salad (tag + title) and Greek Salad (title + category), in
    // catalog order
    assert_eq!(ids(&outcome.results), vec!["3", "6"]);
}

#[test]
fn test_query_matching_no_field_returns_empty() {
    let outcome = search_service().search(
        "completely absent term",
        &SearchFilters::default(),
        SortKey::Relevance,
    );
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.total_results, 0);
}

#[test]
fn test_rating_sort_places_carbonara_before_caesar() {
    // 4.9 outranks 4.6
    let mut results = search_service()
        .search("a", &SearchFilters::default(), SortKey::Relevance)
        .results;
    sort_recipes(&mut results, SortKey::Rating);

    let position = |id: &str| results.iter().position(|r| r.id == id).unwrap();
    assert!(position("7") < position("3"));
}

#[test]
fn test_filters_and_sort_compose() {
    let filters = SearchFilters {
        difficulty: DifficultyFilter::Only(Difficulty::Medium),
        ..Default::default()
    };
    let outcome = search_service().search("a", &filters, SortKey::CookTime);

    assert!(outcome
        .results
        .iter()
        .all(|r| r.difficulty == Difficulty::Medium));
    assert!(outcome
        .results
        .windows(2)
        .all(|pair| pair[0].cook_time <= pair[1].cook_time));
}

// ============================================================================
// Stable Sorting
// ============================================================================

#[test]
fn test_relevance_sort_is_idempotent() {
    let mut results = search_service()
        .search("salad", &SearchFilters::default(), SortKey::Relevance)
        .results;
    let original = ids(&results).into_iter().map(String::from).collect::<Vec<_>>();

    sort_recipes(&mut results, SortKey::Relevance);
    sort_recipes(&mut results, SortKey::Relevance);

    assert_eq!(ids(&results), original);
}

#[test]
fn test_equal_ratings_preserve_input_order() {
    let mut recipes = vec![
        test_recipe("a", 4.5, 10, 100),
        test_recipe("b", 5.0, 20, 200),
        test_recipe("c", 4.5, 30, 300),
        test_recipe("d", 4.5, 40, 400),
    ];

    sort_recipes(&mut recipes, SortKey::Rating);

    // b leads; the 4.5 block keeps a, c, d in input order
    assert_eq!(ids(&recipes), vec!["b", "a", "c", "d"]);
}

#[test]
fn test_cook_time_and_calories_sort_ascending_with_stable_ties() {
    let mut by_time = vec![
        test_recipe("a", 4.0, 30, 300),
        test_recipe("b", 4.0, 10, 200),
        test_recipe("c", 4.0, 30, 100),
    ];
    sort_recipes(&mut by_time, SortKey::CookTime);
    assert_eq!(ids(&by_time), vec!["b", "a", "c"]);

    let mut by_calories = vec![
        test_recipe("a", 4.0, 30, 300),
        test_recipe("b", 4.0, 10, 200),
        test_recipe("c", 4.0, 30, 100),
    ];
    sort_recipes(&mut by_calories, SortKey::Calories);
    assert_eq!(ids(&by_calories), vec!["c", "b", "a"]);
}

// ============================================================================
// Suggestions: Local Path and Fetch Threshold
// ============================================================================

#[test]
fn test_suggestions_capped_and_deduplicated() {
    let svc = suggestion_service(0, 0);

    let suggestions = svc.local_suggestions("a");
    assert!(suggestions.len() <= MAX_SUGGESTIONS);

    let mut sorted = suggestions.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), suggestions.len());
}

#[tokio::test]
async fn test_short_queries_never_hit_the_source() {
    let catalog = Arc::new(RecipeCatalog::builtin());
    let source = Arc::new(CountingSource::new());
    let svc = SuggestionService::new(catalog, source.clone(), Duration::ZERO);

    let one = svc.suggest("p").await.unwrap();
    let two = svc.suggest("pi").await.unwrap();

    assert!(matches!(one, FetchOutcome::Suggestions(_)));
    assert!(matches!(two, FetchOutcome::Suggestions(_)));
    assert_eq!(source.call_count(), 0);

    svc.suggest("piz").await.unwrap();
    assert_eq!(source.call_count(), 1);
}

// ============================================================================
// Suggestions: Debounce and Cancellation
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_newer_fetch_supersedes_older_during_debounce() {
    let svc = suggestion_service(300, 400);

    let first = {
        let svc = svc.clone();
        tokio::spawn(async move { svc.suggest("chicken").await })
    };
    tokio::task::yield_now().await;

    let second = {
        let svc = svc.clone();
        tokio::spawn(async move { svc.suggest("curry").await })
    };

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();

    assert_eq!(first, FetchOutcome::Superseded);
    assert_eq!(
        second,
        FetchOutcome::Suggestions(vec!["curry".to_string(), "Thai Green Curry".to_string()])
    );
}

#[tokio::test(start_paused = true)]
async fn test_response_in_flight_is_discarded_when_superseded() {
    let svc = suggestion_service(300, 400);

    let first = {
        let svc = svc.clone();
        tokio::spawn(async move { svc.suggest("chicken").await })
    };
    // Let the first fetch clear its debounce and enter the simulated
    // round trip before the next keystroke arrives
    tokio::time::advance(Duration::from_millis(350)).await;

    let second = {
        let svc = svc.clone();
        tokio::spawn(async move { svc.suggest("greek").await })
    };

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();

    assert_eq!(first, FetchOutcome::Superseded);
    assert!(matches!(second, FetchOutcome::Suggestions(_)));
}

#[tokio::test(start_paused = true)]
async fn test_clearing_the_field_aborts_the_pending_fetch() {
    let svc = suggestion_service(300, 400);

    let pending = {
        let svc = svc.clone();
        tokio::spawn(async move { svc.suggest("chicken").await })
    };
    tokio::task::yield_now().await;
    svc.cancel_pending();

    assert_eq!(pending.await.unwrap().unwrap(), FetchOutcome::Superseded);
}
