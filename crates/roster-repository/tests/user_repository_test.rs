//! Integration tests for MySqlUserRepository.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use roster_core::{NewUser, UserId};
use roster_repository::{MySqlUserRepository, UserRepository};

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser::new(name, email, "$2b$12$test-hash")
}

#[tokio::test]
async fn test_insert_assigns_id_and_stores_fields() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let saved = repo
        .insert(&new_user("Ann", "ann@example.com"))
        .await
        .expect("Failed to insert user");

    assert!(saved.id.into_inner() > 0);
    assert_eq!(saved.name, "Ann");
    assert_eq!(saved.email, "ann@example.com");
    assert_eq!(saved.password_hash, "$2b$12$test-hash");
}

#[tokio::test]
async fn test_insert_then_find_by_id() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let saved = repo
        .insert(&new_user("Bob", "bob@example.com"))
        .await
        .expect("Failed to insert user");

    let found = repo
        .find_by_id(saved.id)
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_eq!(found, saved);
}

#[tokio::test]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let result = repo
        .find_by_id(UserId::from_i64(424242))
        .await
        .expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_returns_every_row() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    assert!(repo.find_all().await.expect("Query failed").is_empty());

    let first = repo
        .insert(&new_user("Ann", "ann@example.com"))
        .await
        .expect("Failed to insert user");
    let second = repo
        .insert(&new_user("Bob", "bob@example.com"))
        .await
        .expect("Failed to insert user");

    let all = repo.find_all().await.expect("Query failed");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    repo.insert(&new_user("Ann", "dup@example.com"))
        .await
        .expect("Failed to insert user");

    let result = repo.insert(&new_user("Ann Again", "dup@example.com")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_name_changes_only_name() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let saved = repo
        .insert(&new_user("Ann", "ann@example.com"))
        .await
        .expect("Failed to insert user");

    let updated = repo
        .update_name(saved.id, "Annie")
        .await
        .expect("Update failed")
        .expect("User missing after update");

    assert_eq!(updated.name, "Annie");
    assert_eq!(updated.email, saved.email);
    assert_eq!(updated.password_hash, saved.password_hash);
    assert_eq!(updated.id, saved.id);
}

#[tokio::test]
async fn test_update_name_missing_row_returns_none() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let result = repo
        .update_name(UserId::from_i64(424242), "Nobody")
        .await
        .expect("Update failed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    let saved = repo
        .insert(&new_user("Ann", "ann@example.com"))
        .await
        .expect("Failed to insert user");

    assert!(repo.delete(saved.id).await.expect("Delete failed"));
    assert!(repo
        .find_by_id(saved.id)
        .await
        .expect("Query failed")
        .is_none());
}

#[tokio::test]
async fn test_delete_missing_row_reports_false() {
    let db = TestDatabase::new().await;
    let repo = MySqlUserRepository::new(db.pool());

    assert!(!repo
        .delete(UserId::from_i64(424242))
        .await
        .expect("Delete failed"));
}
