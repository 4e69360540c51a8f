//! User-related DTOs.

use roster_core::{User, UserId};
use serde::{Deserialize, Serialize};

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request to update a user's name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}

/// Full user response DTO.
///
/// Mirrors the stored record, hash included; the wire key for the hash is
/// `password`, matching the persisted entity's serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        }
    }
}

/// Trimmed response returned by the update operation: name and email only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub name: String,
    pub email: String,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::UserId;

    fn user() -> User {
        User::new(UserId::from_i64(1), "Ann", "a@x.com", "$2b$12$hash")
    }

    #[test]
    fn test_user_response_from_user() {
        let response = UserResponse::from(user());
        assert_eq!(response.id, UserId::from_i64(1));
        assert_eq!(response.password_hash, "$2b$12$hash");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["password"], "$2b$12$hash");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_profile_response_carries_only_name_and_email() {
        let response = UserProfileResponse::from(user());
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["name"], "Ann");
        assert_eq!(object["email"], "a@x.com");
    }
}
