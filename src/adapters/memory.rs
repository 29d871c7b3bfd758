//! In-memory store adapter
//!
//! A [UserStore] that never touches the filesystem. Used by unit tests and
//! by callers that want an ephemeral, throwaway session (nothing survives
//! the process).

use std::sync::RwLock;

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::UserStore;

/// Ephemeral [UserStore] implementation
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    current: RwLock<Option<User>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn load_users(&self) -> Vec<User> {
        self.users
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        *self
            .users
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = users.to_vec();
        Ok(())
    }

    fn load_current_user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn save_current_user(&self, user: Option<&User>) -> Result<()> {
        *self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = user.cloned();
        Ok(())
    }
}
