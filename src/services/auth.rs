//! Auth service - simulated account operations
//!
//! The backend here is a simulation: every operation resolves locally
//! against the user store after an artificial delay standing in for network
//! latency. Domain failures (duplicate email, unknown email) are explicit
//! outcome values, never errors; the only errors this service can return
//! are storage write failures.
//!
//! This service is the single writer of the [Session] cell. Every mutation
//! persists the affected record to both the directory and the current-user
//! pointer, then updates the session, so readers always observe the
//! operation's effect once it resolves.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::result::Result;
use crate::domain::User;
use crate::ports::UserStore;
use crate::session::Session;

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// The account was created and is now signed in
    Registered(User),
    /// Another account already uses this email; nothing was changed
    EmailTaken,
}

/// Outcome of a login attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// The account was found and is now signed in
    LoggedIn(User),
    /// No account uses this email
    UnknownEmail,
}

/// Outcome of a password reset request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Reset instructions were "sent" (simulated; no mail leaves the
    /// machine and no password changes)
    Sent,
    /// No account uses this email
    UnknownEmail,
}

/// Outcome of a profile update
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    /// The merged record, persisted and visible in the session
    Updated(User),
    /// The requested email already belongs to another account
    EmailTaken,
    /// Nobody is signed in; nothing was changed
    NotSignedIn,
}

/// How to change the profile picture, when at all
#[derive(Debug, Clone, PartialEq)]
pub enum PictureUpdate {
    Set(String),
    Remove,
}

/// Partial profile update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<PictureUpdate>,
}

/// Account and preference operations over the user store
pub struct AuthService {
    store: Arc<dyn UserStore>,
    session: Arc<Session>,
    auth_delay: Duration,
    reset_delay: Duration,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        session: Arc<Session>,
        auth_delay: Duration,
        reset_delay: Duration,
    ) -> Self {
        Self {
            store,
            session,
            auth_delay,
            reset_delay,
        }
    }

    /// Register a new account and sign it in.
    ///
    /// The password is accepted for interface parity but not stored; the
    /// simulated backend keeps no credentials.
    ///
    /// # Errors
    ///
    /// Returns an error only if persisting the new account fails.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<RegisterOutcome> {
        self.simulate_latency(self.auth_delay).await;

        let mut users = self.store.load_users();
        if users.iter().any(|user| user.email == email) {
            tracing::debug!(%email, "registration rejected: email already in use");
            return Ok(RegisterOutcome::EmailTaken);
        }

        let user = User::new(name, email);
        users.push(user.clone());
        self.store.save_users(&users)?;
        self.store.save_current_user(Some(&user))?;
        self.session.set(Some(user.clone()));

        tracing::info!(user_id = %user.id, "registered new user");
        Ok(RegisterOutcome::Registered(user))
    }

    /// Sign in by email.
    ///
    /// Lookup is by exact email match only. The password is required by the
    /// signature but never checked - the simulated backend has nothing to
    /// check it against.
    pub async fn login(&self, email: &str, _password: &str) -> Result<LoginOutcome> {
        self.simulate_latency(self.auth_delay).await;

        match self.find_by_email(email) {
            Some(user) => {
                self.store.save_current_user(Some(&user))?;
                self.session.set(Some(user.clone()));
                tracing::info!(user_id = %user.id, "user signed in");
                Ok(LoginOutcome::LoggedIn(user))
            }
            None => {
                tracing::debug!(%email, "login rejected: unknown email");
                Ok(LoginOutcome::UnknownEmail)
            }
        }
    }

    /// Sign out: clears the current-user pointer and the session cell.
    ///
    /// The account stays in the directory.
    pub fn logout(&self) -> Result<()> {
        self.store.save_current_user(None)?;
        self.session.set(None);
        tracing::info!("user signed out");
        Ok(())
    }

    /// Request password reset instructions for an email.
    ///
    /// Purely simulated: reports whether the account exists, sends nothing
    /// and mutates nothing.
    pub async fn reset_password(&self, email: &str) -> Result<ResetOutcome> {
        self.simulate_latency(self.reset_delay).await;

        if self.find_by_email(email).is_some() {
            tracing::info!(%email, "password reset instructions sent (simulated)");
            Ok(ResetOutcome::Sent)
        } else {
            Ok(ResetOutcome::UnknownEmail)
        }
    }

    /// Merge partial profile fields into the signed-in user and persist the
    /// result.
    ///
    /// An email change that would collide with another account is refused
    /// with [ProfileOutcome::EmailTaken] to keep emails unique in the
    /// directory.
    pub fn update_profile(&self, update: ProfileUpdate) -> Result<ProfileOutcome> {
        let Some(mut user) = self.session.current_user() else {
            return Ok(ProfileOutcome::NotSignedIn);
        };

        if let Some(email) = &update.email {
            let taken = self
                .store
                .load_users()
                .iter()
                .any(|other| other.id != user.id && &other.email == email);
            if taken {
                tracing::debug!(%email, "profile update rejected: email already in use");
                return Ok(ProfileOutcome::EmailTaken);
            }
            user.email = email.clone();
        }

        if let Some(name) = update.name {
            user.name = name;
        }

        match update.profile_picture {
            Some(PictureUpdate::Set(picture)) => user.profile_picture = Some(picture),
            Some(PictureUpdate::Remove) => user.profile_picture = None,
            None => {}
        }

        self.persist_current(user.clone())?;
        Ok(ProfileOutcome::Updated(user))
    }

    /// Add a recipe to the signed-in user's favorites. Idempotent; no-op
    /// when signed out.
    pub fn add_to_favorites(&self, recipe_id: &str) -> Result<()> {
        self.mutate_current(|user| user.add_favorite(recipe_id))
    }

    /// Remove a recipe from the signed-in user's favorites. Removing an
    /// absent id is a no-op.
    pub fn remove_from_favorites(&self, recipe_id: &str) -> Result<()> {
        self.mutate_current(|user| user.remove_favorite(recipe_id))
    }

    /// Add a recipe to the signed-in user's saved list. Same semantics as
    /// favorites.
    pub fn add_to_saved(&self, recipe_id: &str) -> Result<()> {
        self.mutate_current(|user| user.add_saved(recipe_id))
    }

    /// Remove a recipe from the signed-in user's saved list.
    pub fn remove_from_saved(&self, recipe_id: &str) -> Result<()> {
        self.mutate_current(|user| user.remove_saved(recipe_id))
    }

    /// Record an executed search in the signed-in user's history.
    ///
    /// Blank queries are ignored; re-issued queries move to the front; the
    /// history keeps the 10 most recent entries.
    pub fn add_to_search_history(&self, query: &str) -> Result<()> {
        self.mutate_current(|user| user.push_search_query(query))
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.store
            .load_users()
            .into_iter()
            .find(|user| user.email == email)
    }

    /// Apply a mutation to the signed-in user and persist it when it
    /// changed anything. Signed-out and unchanged cases are no-ops.
    fn mutate_current(&self, mutate: impl FnOnce(&mut User) -> bool) -> Result<()> {
        let Some(mut user) = self.session.current_user() else {
            return Ok(());
        };

        if mutate(&mut user) {
            self.persist_current(user)?;
        }
        Ok(())
    }

    /// Write the user back to the directory (found by id) and the
    /// current-user pointer, then refresh the session cell.
    fn persist_current(&self, user: User) -> Result<()> {
        let mut users = self.store.load_users();
        if let Some(slot) = users.iter_mut().find(|existing| existing.id == user.id) {
            *slot = user.clone();
            self.store.save_users(&users)?;
            self.store.save_current_user(Some(&user))?;
        }
        self.session.set(Some(user));
        Ok(())
    }

    async fn simulate_latency(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
