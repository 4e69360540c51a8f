//! Repository trait definitions.

use async_trait::async_trait;
use roster_core::{Interface, NewUser, RosterResult, User, UserId};

/// User repository trait.
///
/// The store assigns ids on insert; `find_by_id` and `update_name` report a
/// missing row as `Ok(None)` and `delete` as `Ok(false)` so the service
/// layer decides what a miss means.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Inserts a new user and returns the stored record with its assigned id.
    async fn insert(&self, user: &NewUser) -> RosterResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> RosterResult<Option<User>>;

    /// Returns all stored users.
    async fn find_all(&self) -> RosterResult<Vec<User>>;

    /// Updates a user's name, returning the updated record if it exists.
    async fn update_name(&self, id: UserId, name: &str) -> RosterResult<Option<User>>;

    /// Deletes a user by ID, reporting whether a row was removed.
    async fn delete(&self, id: UserId) -> RosterResult<bool>;
}
