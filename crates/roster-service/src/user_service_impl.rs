//! User service implementations.

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserProfileResponse, UserResponse};
use crate::user_service::UserService;
use async_trait::async_trait;
use roster_core::{NewUser, RosterError, RosterResult, UserId};
use roster_repository::UserRepository;
use roster_security::PasswordHasherInterface;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

async fn create_user_op(
    repository: &dyn UserRepository,
    hasher: &dyn PasswordHasherInterface,
    request: CreateUserRequest,
) -> RosterResult<UserResponse> {
    debug!("Creating user: {}", request.email);

    let password_hash = hasher.hash(&request.password)?;
    let user = NewUser::new(request.name, request.email, password_hash);

    let saved = repository.insert(&user).await?;

    info!("User created: {}", saved.id);
    Ok(UserResponse::from(saved))
}

async fn list_users_op(repository: &dyn UserRepository) -> RosterResult<Vec<UserResponse>> {
    debug!("Listing users");

    let users = repository.find_all().await?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

async fn get_user_op(repository: &dyn UserRepository, id: UserId) -> RosterResult<UserResponse> {
    debug!("Getting user: {}", id);

    let user = repository
        .find_by_id(id)
        .await?
        .ok_or_else(|| RosterError::not_found("User", id))?;

    Ok(UserResponse::from(user))
}

async fn update_user_op(
    repository: &dyn UserRepository,
    id: UserId,
    request: UpdateUserRequest,
) -> RosterResult<UserProfileResponse> {
    debug!("Updating user: {}", id);

    let updated = repository
        .update_name(id, &request.name)
        .await?
        .ok_or_else(|| RosterError::not_found("User", id))?;

    info!("User updated: {}", id);
    Ok(UserProfileResponse::from(updated))
}

async fn delete_user_op(repository: &dyn UserRepository, id: UserId) -> RosterResult<()> {
    debug!("Deleting user: {}", id);

    let deleted = repository.delete(id).await?;
    if !deleted {
        return Err(RosterError::not_found("User", id));
    }

    info!("User deleted: {}", id);
    Ok(())
}

/// Generic user service implementation (non-DI).
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
    password_hasher: Arc<dyn PasswordHasherInterface>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>, password_hasher: Arc<dyn PasswordHasherInterface>) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        create_user_op(&*self.user_repository, &*self.password_hasher, request).await
    }

    async fn list_users(&self) -> RosterResult<Vec<UserResponse>> {
        list_users_op(&*self.user_repository).await
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        get_user_op(&*self.user_repository, id).await
    }

    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> RosterResult<UserProfileResponse> {
        update_user_op(&*self.user_repository, id, request).await
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        delete_user_op(&*self.user_repository, id).await
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

/// Concrete user service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
    #[shaku(inject)]
    password_hasher: Arc<dyn PasswordHasherInterface>,
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn create_user(&self, request: CreateUserRequest) -> RosterResult<UserResponse> {
        create_user_op(&*self.user_repository, &*self.password_hasher, request).await
    }

    async fn list_users(&self) -> RosterResult<Vec<UserResponse>> {
        list_users_op(&*self.user_repository).await
    }

    async fn get_user(&self, id: UserId) -> RosterResult<UserResponse> {
        get_user_op(&*self.user_repository, id).await
    }

    async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> RosterResult<UserProfileResponse> {
        update_user_op(&*self.user_repository, id, request).await
    }

    async fn delete_user(&self, id: UserId) -> RosterResult<()> {
        delete_user_op(&*self.user_repository, id).await
    }
}
