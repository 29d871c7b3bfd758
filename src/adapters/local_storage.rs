//! Local storage adapter - file-per-key JSON persistence
//!
//! Mirrors browser local storage: each storage key maps to one UTF-8 JSON
//! file inside the data directory, and removing a key deletes its file.
//! The stored values keep the original key names and camelCase layout:
//!
//! - `recipe_app_users.json` - JSON array of user objects
//! - `recipe_app_current_user.json` - one user object; absent when logged out
//!
//! There is no file locking. Two processes sharing a data directory race
//! exactly like two browser tabs sharing an origin: last write wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::UserStore;

/// Storage key for the user directory
pub const USERS_KEY: &str = "recipe_app_users";
/// Storage key for the current-user pointer
pub const CURRENT_USER_KEY: &str = "recipe_app_current_user";

/// File-backed [UserStore] implementation
pub struct LocalStorageStore {
    dir: PathBuf,
}

impl LocalStorageStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// The data directory backing this store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_key(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.key_path(key)).ok()
    }

    fn write_key(&self, key: &str, contents: &str) -> Result<()> {
        fs::write(self.key_path(key), contents)?;
        Ok(())
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            // Clearing an already-absent key is a no-op
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl UserStore for LocalStorageStore {
    fn load_users(&self) -> Vec<User> {
        self.read_key(USERS_KEY)
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default()
    }

    fn save_users(&self, users: &[User]) -> Result<()> {
        let text = serde_json::to_string(users)?;
        self.write_key(USERS_KEY, &text)
    }

    fn load_current_user(&self) -> Option<User> {
        self.read_key(CURRENT_USER_KEY)
            .and_then(|text| serde_json::from_str(&text).ok())
    }

    fn save_current_user(&self, user: Option<&User>) -> Result<()> {
        match user {
            Some(user) => {
                let text = serde_json::to_string(user)?;
                self.write_key(CURRENT_USER_KEY, &text)
            }
            None => self.remove_key(CURRENT_USER_KEY),
        }
    }
}
