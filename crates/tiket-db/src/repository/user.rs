//! # User Repository
//!
//! Accounts are append-only: they can be created and updated, never deleted.

use tracing::debug;

use tiket_core::{Id, NewUser, User, UserPatch};

use crate::store::SharedState;

/// Repository for user operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    state: SharedState,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub(crate) fn new(state: SharedState) -> Self {
        UserRepository { state }
    }

    /// Gets a user by ID.
    pub async fn get_by_id(&self, id: Id) -> Option<User> {
        self.state.read().await.users.get(id)
    }

    /// Gets a user by exact username (used by the login flow).
    ///
    /// Usernames are not enforced unique; the earliest match wins.
    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        self.state
            .read()
            .await
            .users
            .find(|u| u.username == username)
    }

    /// Lists all users in creation order.
    pub async fn list(&self) -> Vec<User> {
        self.state.read().await.users.all()
    }

    /// Creates a user. New users are never admins.
    pub async fn insert(&self, new: NewUser) -> User {
        let mut state = self.state.write().await;
        let user = state.users.insert_with(|id| new.into_record(id));
        debug!(id = user.id, username = %user.username, "Inserted user");
        user
    }

    /// Merges `patch` over an existing user.
    ///
    /// ## Returns
    /// * `Some(User)` - The updated user
    /// * `None` - No user with this ID
    pub async fn update(&self, id: Id, patch: UserPatch) -> Option<User> {
        debug!(id, "Updating user");
        self.state.write().await.users.update(id, patch)
    }
}
