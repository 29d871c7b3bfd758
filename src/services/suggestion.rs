//! Suggestion service - typeahead with debouncing and cancellation
//!
//! Two paths serve the search box:
//!
//! - a cheap synchronous path answering straight from the catalog, used for
//!   queries shorter than [MIN_FETCH_LEN] characters (short queries always
//!   get local suggestions; they never trigger a fetch), and
//! - a debounced asynchronous fetch through the [SuggestionSource] port for
//!   longer queries.
//!
//! Cancellation uses a generation counter: every call (and every explicit
//! [SuggestionService::cancel_pending]) advances the generation, and a
//! fetch result is applied only while its generation is still the latest.
//! A superseded fetch resolves to [FetchOutcome::Superseded] - a discarded
//! value, not an error - so a stale response can never overwrite a newer
//! one, no matter how the in-flight futures interleave.
//!
//! Keyboard navigation through a displayed suggestion list is a UI concern:
//! highlighting entries and restoring the typed text must not call into
//! this service at all. Only a text change is a new keystroke here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::adapters::RecipeCatalog;
use crate::domain::result::Result;
use crate::ports::SuggestionSource;

/// Queries shorter than this stay on the synchronous local path.
pub const MIN_FETCH_LEN: usize = 3;

/// What a debounced fetch resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The freshest response; safe to display
    Suggestions(Vec<String>),
    /// A newer request was issued (or the field was cleared) while this one
    /// was in flight; discard it
    Superseded,
}

/// Typeahead suggestions over the catalog and a [SuggestionSource]
pub struct SuggestionService {
    catalog: Arc<RecipeCatalog>,
    source: Arc<dyn SuggestionSource>,
    debounce: Duration,
    generation: AtomicU64,
}

impl SuggestionService {
    pub fn new(
        catalog: Arc<RecipeCatalog>,
        source: Arc<dyn SuggestionSource>,
        debounce: Duration,
    ) -> Self {
        Self {
            catalog,
            source,
            debounce,
            generation: AtomicU64::new(0),
        }
    }

    /// Synchronous suggestions from the catalog; no debounce, no fetch.
    pub fn local_suggestions(&self, query: &str) -> Vec<String> {
        self.catalog.suggestions(query)
    }

    /// Suggestions for the latest keystroke.
    ///
    /// Short queries resolve immediately from the local path. Longer
    /// queries wait out the debounce interval and then fetch from the
    /// source; if another call (or [SuggestionService::cancel_pending])
    /// happens first, the result is [FetchOutcome::Superseded].
    ///
    /// # Errors
    ///
    /// Propagates a failure from the suggestion source. The built-in
    /// catalog source cannot fail.
    pub async fn suggest(&self, query: &str) -> Result<FetchOutcome> {
        // Every keystroke supersedes whatever was in flight, including a
        // keystroke that shortens the query below the fetch threshold.
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().chars().count() < MIN_FETCH_LEN {
            return Ok(FetchOutcome::Suggestions(self.local_suggestions(query)));
        }

        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        if self.is_superseded(generation) {
            return Ok(FetchOutcome::Superseded);
        }

        let candidates = self.source.fetch(query).await?;
        if self.is_superseded(generation) {
            tracing::debug!(
                %query,
                source = self.source.name(),
                "discarding suggestions for superseded fetch"
            );
            return Ok(FetchOutcome::Superseded);
        }

        Ok(FetchOutcome::Suggestions(candidates))
    }

    /// Abort any in-flight fetch without starting a new one (the user
    /// cleared the field).
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) != generation
    }
}
