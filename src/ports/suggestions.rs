//! Suggestion source port
//!
//! Defines the interface for the remote-style suggestion fetch. The
//! built-in implementation answers from the in-memory catalog behind a
//! simulated latency; a production deployment would put a network client
//! behind the same trait (and add a timeout, which the simulated source
//! does not need).

use async_trait::async_trait;

use crate::domain::result::Result;

/// Asynchronous provider of typeahead suggestion candidates
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Source name (e.g., "catalog")
    fn name(&self) -> &str;

    /// Fetch suggestion candidates for a partial query.
    ///
    /// Candidates are returned de-duplicated and capped by the source;
    /// ordering is source-defined.
    async fn fetch(&self, query: &str) -> Result<Vec<String>>;
}
