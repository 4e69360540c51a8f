//! User entity.

use crate::{Entity, UserId};
use serde::{Deserialize, Serialize};

/// A persisted user record.
///
/// `password_hash` is serialized under the key `password` because the wire
/// contract returns the stored record, hash included, on create/list/get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned surrogate key.
    pub id: UserId,

    /// Display name; the only mutable field.
    pub name: String,

    /// Email address, unique at the store level.
    pub email: String,

    /// Bcrypt hash of the password submitted at creation.
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl User {
    /// Creates a user from its stored fields.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Renames the user.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Fields of a user about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Creates a new insert record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }

    /// Attaches a store-assigned id, producing the persisted entity.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_user() -> User {
        User::new(UserId::from_i64(1), "Ann", "a@x.com", "$2b$12$hash")
    }

    #[test]
    fn test_user_creation() {
        let user = create_user();
        assert_eq!(user.id, UserId::from_i64(1));
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password_hash, "$2b$12$hash");
    }

    #[test]
    fn test_user_rename() {
        let mut user = create_user();
        user.rename("Annie");
        assert_eq!(user.name, "Annie");
        // id and email are untouched
        assert_eq!(user.id, UserId::from_i64(1));
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn test_entity_id() {
        let user = create_user();
        assert_eq!(Entity::id(&user), &UserId::from_i64(1));
    }

    #[test]
    fn test_new_user_into_user() {
        let new_user = NewUser::new("Bob", "b@x.com", "hash");
        let user = new_user.into_user(UserId::from_i64(5));
        assert_eq!(user.id, UserId::from_i64(5));
        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "b@x.com");
        assert_eq!(user.password_hash, "hash");
    }

    #[test]
    fn test_user_serializes_hash_under_password_key() {
        let user = create_user();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["password"], "$2b$12$hash");
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_user_deserializes_from_wire_shape() {
        let user: User = serde_json::from_str(
            r#"{"id":2,"name":"Cam","email":"c@x.com","password":"h"}"#,
        )
        .unwrap();
        assert_eq!(user.id, UserId::from_i64(2));
        assert_eq!(user.password_hash, "h");
    }
}
