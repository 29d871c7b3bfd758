//! Session state - the current-user cell
//!
//! A single "current user or absent" cell shared by everything that needs
//! to know who is signed in. [crate::services::AuthService] is the only
//! writer; every other component treats the cell as a pure read and
//! re-reads it after mutations rather than caching.

use std::sync::RwLock;

use crate::domain::User;
use crate::ports::UserStore;

/// Shared current-user cell
pub struct Session {
    current: RwLock<Option<User>>,
}

impl Session {
    /// A session with nobody signed in.
    pub fn empty() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Restore the session from the persisted current-user pointer.
    ///
    /// A stored pointer whose id no longer matches any directory record is
    /// stale (the directory was wiped or replaced underneath it); it is
    /// cleared from the store and the session starts signed out.
    pub fn restore(store: &dyn UserStore) -> Self {
        let stored = store.load_current_user();

        let current = match stored {
            Some(user) => {
                let in_directory = store.load_users().iter().any(|u| u.id == user.id);
                if in_directory {
                    Some(user)
                } else {
                    tracing::warn!(user_id = %user.id, "clearing stale current-user pointer");
                    if let Err(error) = store.save_current_user(None) {
                        tracing::warn!(%error, "could not clear stale current-user pointer");
                    }
                    None
                }
            }
            None => None,
        };

        Self {
            current: RwLock::new(current),
        }
    }

    /// The signed-in user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Whether anyone is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .is_some()
    }

    /// The signed-in user's most recent search queries, newest first, at
    /// most `limit` entries. Empty when signed out.
    pub fn recent_searches(&self, limit: usize) -> Vec<String> {
        self.current_user()
            .map(|user| user.search_history.into_iter().take(limit).collect())
            .unwrap_or_default()
    }

    pub(crate) fn set(&self, user: Option<User>) {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = user;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStore;

    #[test]
    fn test_empty_session_is_signed_out() {
        let session = Session::empty();
        assert!(!session.is_signed_in());
        assert!(session.current_user().is_none());
        assert!(session.recent_searches(5).is_empty());
    }

    #[test]
    fn test_restore_picks_up_stored_user() {
        let store = MemoryStore::new();
        let user = User::new("Alice", "alice@example.com");
        store.save_users(std::slice::from_ref(&user)).unwrap();
        store.save_current_user(Some(&user)).unwrap();

        let session = Session::restore(&store);
        assert_eq!(session.current_user(), Some(user));
    }

    #[test]
    fn test_restore_clears_stale_pointer() {
        let store = MemoryStore::new();
        // Pointer exists but the directory does not contain the user
        let ghost = User::new("Ghost", "ghost@example.com");
        store.save_current_user(Some(&ghost)).unwrap();

        let session = Session::restore(&store);

        assert!(!session.is_signed_in());
        assert!(store.load_current_user().is_none());
    }

    #[test]
    fn test_recent_searches_truncates() {
        let store = MemoryStore::new();
        let mut user = User::new("Alice", "alice@example.com");
        for query in ["a", "b", "c"] {
            user.push_search_query(query);
        }
        store.save_users(std::slice::from_ref(&user)).unwrap();
        store.save_current_user(Some(&user)).unwrap();

        let session = Session::restore(&store);
        assert_eq!(session.recent_searches(2), vec!["c", "b"]);
    }
}
