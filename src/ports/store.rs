//! User store port - persistence abstraction
//!
//! The store is a thin key-value layer over durable local storage. It holds
//! the full user directory and the current-user pointer, and nothing else.
//! All calls are synchronous and non-blocking; writes are whole-object
//! overwrites with last-write-wins semantics (no locking).

use crate::domain::result::Result;
use crate::domain::User;

/// Durable storage abstraction for the user directory
///
/// Loads are infallible by contract: missing or unparsable content reads as
/// "no data" rather than surfacing a parse error. Only writes can fail, and
/// only for infrastructure reasons (I/O).
pub trait UserStore: Send + Sync {
    /// Load the full user directory.
    ///
    /// Returns an empty list when nothing is stored or the stored content
    /// cannot be parsed.
    fn load_users(&self) -> Vec<User>;

    /// Overwrite the stored user directory with `users`.
    ///
    /// This is a full replacement; there are no partial or merge semantics
    /// at this layer.
    fn save_users(&self, users: &[User]) -> Result<()>;

    /// Load the current-user pointer, if one is stored and parsable.
    fn load_current_user(&self) -> Option<User>;

    /// Store or clear the current-user pointer.
    ///
    /// Passing `None` removes the stored pointer entirely.
    fn save_current_user(&self, user: Option<&User>) -> Result<()>;
}
