//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod auth;
mod review;
mod search;
mod suggestion;

pub use auth::{
    AuthService, LoginOutcome, PictureUpdate, ProfileOutcome, ProfileUpdate, RegisterOutcome,
    ResetOutcome,
};
pub use review::ReviewService;
pub use search::{
    sort_recipes, DifficultyFilter, SearchFilters, SearchOutcome, SearchService, SortKey,
};
pub use suggestion::{FetchOutcome, SuggestionService, MIN_FETCH_LEN};
