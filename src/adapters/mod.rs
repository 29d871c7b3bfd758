//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - Local filesystem (file-per-key JSON) for the UserStore port
//! - In-memory store for tests and ephemeral sessions
//! - Built-in recipe catalog, also serving the SuggestionSource port

pub mod catalog;
pub mod local_storage;
pub mod memory;

pub use catalog::{CatalogSuggestionSource, RecipeCatalog, MAX_SUGGESTIONS};
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;
