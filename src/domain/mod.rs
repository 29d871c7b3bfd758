//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod recipe;
mod review;
mod user;
pub mod result;

pub use recipe::{Difficulty, Recipe};
pub use review::Review;
pub use user::{User, SEARCH_HISTORY_LIMIT};
