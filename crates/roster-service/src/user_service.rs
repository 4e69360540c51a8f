//! User service trait definition.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserProfileResponse, UserResponse};
use async_trait::async_trait;
use roster_core::{Interface, RosterResult, UserId};

/// User service trait.
///
/// Missing records surface as `RosterError::NotFound`; the REST boundary
/// decides per endpoint what status that becomes.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Creates a new user, hashing the submitted password.
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse>;

    /// Lists all users.
    async fn list_users(&self) -> RosterResult<Vec<UserResponse>>;

    /// Gets a user by ID.
    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse>;

    /// Updates a user's name, returning the trimmed profile.
    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> RosterResult<UserProfileResponse>;

    /// Deletes a user.
    async fn delete_user(&self, id: UserId) -> RosterResult<()>;
}
