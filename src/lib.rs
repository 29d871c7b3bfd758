//! TasteBook Core - business logic for recipe discovery
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Recipe, Review)
//! - **ports**: Trait definitions for external dependencies (UserStore, SuggestionSource)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (local JSON storage, built-in catalog)
//!
//! The "backend" is a simulation: registration, login and suggestion
//! fetches resolve locally against JSON files in a data directory after an
//! artificial delay, mirroring the behavior of a browser client talking to
//! an API. The UI layer is an external consumer of this crate.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod session;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{CatalogSuggestionSource, LocalStorageStore, RecipeCatalog};
use config::Config;
use ports::UserStore;
use services::*;
use session::Session;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Difficulty, Recipe, Review, User};

/// Main context for TasteBook operations
///
/// This is the primary entry point for a consumer. It holds the store, the
/// catalog, the session cell, and all services, wired together over one
/// data directory.
pub struct TastebookContext {
    pub config: Config,
    pub store: Arc<LocalStorageStore>,
    pub catalog: Arc<RecipeCatalog>,
    pub session: Arc<Session>,
    pub auth_service: AuthService,
    pub search_service: SearchService,
    pub suggestion_service: SuggestionService,
    pub review_service: ReviewService,
}

impl TastebookContext {
    /// Create a new TasteBook context
    ///
    /// Opens (or creates) the data directory, loads the settings, restores
    /// the persisted session, and wires up all services.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let store = Arc::new(LocalStorageStore::new(data_dir)?);
        let catalog = Arc::new(RecipeCatalog::builtin());
        let session = Arc::new(Session::restore(store.as_ref()));

        let user_store: Arc<dyn UserStore> = store.clone();
        let auth_service = AuthService::new(
            user_store,
            session.clone(),
            config.auth_delay(),
            config.reset_delay(),
        );
        let search_service = SearchService::new(catalog.clone());
        let suggestion_source = Arc::new(CatalogSuggestionSource::new(
            catalog.clone(),
            config.suggestion_fetch_delay(),
        ));
        let suggestion_service = SuggestionService::new(
            catalog.clone(),
            suggestion_source,
            config.suggestion_debounce(),
        );
        let review_service = ReviewService::new(config.review_submit_delay());

        Ok(Self {
            config,
            store,
            catalog,
            session,
            auth_service,
            search_service,
            suggestion_service,
            review_service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_context_wires_up_over_empty_directory() {
        let dir = tempdir().unwrap();
        let context = TastebookContext::new(dir.path()).unwrap();

        assert!(!context.session.is_signed_in());
        assert_eq!(context.catalog.all().len(), 8);
        assert!(context.store.load_users().is_empty());
    }
}
