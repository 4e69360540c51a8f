//! User management controller.
//!
//! Implements the service's wire contract exactly, including its observed
//! irregularities: a missing user on GET answers 200 with a message, while
//! non-not-found store failures on PUT/DELETE answer 200 with a generic
//! message. See DESIGN.md for the compatibility decision.

use crate::{
    responses::ApiResponse,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use roster_core::UserId;
use roster_service::{CreateUserRequest, UpdateUserRequest, UserProfileResponse, UserResponse};
use tracing::{debug, error};

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route(
            "/user/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Response {
    debug!("Create user request: {}", request.email);

    match state.user_service.create_user(request).await {
        Ok(user) => (StatusCode::OK, Json(ApiResponse::data(user))).into_response(),
        Err(err) => {
            error!("Error creating user: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::message("Error occured")),
            )
                .into_response()
        }
    }
}

/// List all users.
async fn list_users(State(state): State<AppState>) -> Response {
    debug!("List users request");

    match state.user_service.list_users().await {
        Ok(users) => (StatusCode::OK, Json(ApiResponse::data(users))).into_response(),
        Err(err) => {
            error!("Error fetching users: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<UserResponse>>::message(
                    "Cannot fetch all users",
                )),
            )
                .into_response()
        }
    }
}

/// Get a user by ID.
///
/// A missing user is not an error on this endpoint: the contract answers
/// 200 with a "not registered" message and no data payload.
async fn get_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    debug!("Get user request: {}", id);

    let user_id = match parse_user_id(&id) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };

    match state.user_service.get_user(user_id).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::message_with_data("Single user fetched", user)),
        )
            .into_response(),
        Err(err) if err.is_not_found() => (
            StatusCode::OK,
            Json(ApiResponse::<UserResponse>::message("User not registered")),
        )
            .into_response(),
        Err(err) => {
            error!("Error fetching user {}: {}", user_id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<UserResponse>::message("Cannot get single user")),
            )
                .into_response()
        }
    }
}

/// Update a user's name.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> Response {
    debug!("Update user request: {}", id);

    let user_id = match parse_user_id(&id) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };

    match state.user_service.update_user(user_id, request).await {
        Ok(profile) => (
            StatusCode::OK,
            Json(ApiResponse::message_with_data("User updated", profile)),
        )
            .into_response(),
        Err(err) if err.is_not_found() => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<UserProfileResponse>::message("User not found")),
        )
            .into_response(),
        Err(err) => {
            error!("Error updating user {}: {}", user_id, err);
            // Status 200 on non-not-found store failure is part of the
            // compatibility contract.
            (
                StatusCode::OK,
                Json(ApiResponse::<UserProfileResponse>::message(
                    "Cannot update user",
                )),
            )
                .into_response()
        }
    }
}

/// Delete a user.
async fn delete_user(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    debug!("Delete user request: {}", id);

    let user_id = match parse_user_id(&id) {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };

    match state.user_service.delete_user(user_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::<()>::message("User deleted")),
        )
            .into_response(),
        Err(err) if err.is_not_found() => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::message("User not found")),
        )
            .into_response(),
        Err(err) => {
            error!("Error deleting user {}: {}", user_id, err);
            // Same compatibility quirk as update.
            (
                StatusCode::OK,
                Json(ApiResponse::<()>::message("Cannot delete user")),
            )
                .into_response()
        }
    }
}

/// Helper to parse a user ID from a path parameter.
fn parse_user_id(id: &str) -> Result<UserId, Response> {
    UserId::parse(id).map_err(|_| {
        debug!("Rejecting non-numeric user id: {}", id);
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::message("Invalid user id")),
        )
            .into_response()
    })
}
