//! Integration tests for Users domain
//!
//! These tests use real PostgreSQL via testcontainers to ensure:
//! - Queries and targeted column updates work correctly
//! - The unique email constraint is enforced and translated
//! - The service rules hold end to end against the Postgres gateway

use domain_users::*;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn new_user(name: String, email: String, password: &str) -> CreateUser {
    CreateUser {
        name,
        email,
        password: password.to_string(),
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = new_user(builder.name("user", "main"), builder.email("main"), "p1");

    let created = repo.create(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_eq!(created.email, input.email);
    assert_eq!(created.password, "p1");

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = assert_some(retrieved, "user should exist");
    assert_eq!(retrieved, created);

    let by_email = repo.get_by_email(&input.email).await.unwrap();
    assert_eq!(assert_some(by_email, "user should be found by email").id, created.id);
}

#[tokio::test]
async fn test_unique_email_constraint_is_translated() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("duplicate_email");

    let email = builder.email("dup");

    repo.create(new_user(builder.name("user", "first"), email.clone(), "p1"))
        .await
        .unwrap();

    // Bypasses the service pre-check, so only the table constraint can reject it
    let result = repo
        .create(new_user(builder.name("user", "second"), email.clone(), "p2"))
        .await;

    assert!(
        matches!(result, Err(UserError::DuplicateEmail(ref e)) if *e == email),
        "Expected DuplicateEmail error, got {:?}",
        result
    );
    assert_eq!(db.count_rows("users").await, 1);
}

#[tokio::test]
async fn test_update_constraint_is_translated() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_duplicate_email");

    let first = repo
        .create(new_user(builder.name("user", "a"), builder.email("a"), "p1"))
        .await
        .unwrap();
    repo.create(new_user(builder.name("user", "b"), builder.email("b"), "p2"))
        .await
        .unwrap();

    let result = repo
        .update(
            first.id,
            UpdateUser {
                name: None,
                email: Some(builder.email("b")),
            },
        )
        .await;

    assert!(matches!(result, Err(UserError::DuplicateEmail(_))));
}

#[tokio::test]
async fn test_list_projection_and_order() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("list");

    for i in 1..=3 {
        repo.create(new_user(
            format!("User {}", i),
            builder.email(&format!("u{}", i)),
            "secret",
        ))
        .await
        .unwrap();
    }

    let users = repo.list().await.unwrap();

    let names: Vec<_> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, ["User 1", "User 2", "User 3"]);

    for user in &users {
        let value = serde_json::to_value(user).unwrap();
        assert_field_absent(&value, "password", "listing");
    }
}

#[tokio::test]
async fn test_update_touches_only_supplied_fields() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_partial");

    let created = repo
        .create(new_user("Ana".to_string(), builder.email("ana"), "p1"))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateUser {
                name: Some("X".to_string()),
                email: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "X");
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.password, "p1");

    let unchanged = repo.update(created.id, UpdateUser::default()).await.unwrap();
    assert_eq!(unchanged, updated);
}

#[tokio::test]
async fn test_update_missing_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());

    let result = repo
        .update(
            999,
            UpdateUser {
                name: Some("Ghost".to_string()),
                email: None,
            },
        )
        .await;

    assert!(matches!(result, Err(UserError::NotFound(999))));

    let result = repo.update(999, UpdateUser::default()).await;
    assert!(matches!(result, Err(UserError::NotFound(999))));
}

#[tokio::test]
async fn test_delete_user() {
    let db = TestDatabase::new().await;
    let repo = PgUserRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("delete");

    let created = repo
        .create(new_user(builder.name("user", "gone"), builder.email("gone"), "p1"))
        .await
        .unwrap();

    assert_eq!(repo.delete(created.id).await.unwrap(), DeleteOutcome::Deleted);
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    assert_eq!(repo.delete(created.id).await.unwrap(), DeleteOutcome::NotFound);
}

// ============================================================================
// Service Tests (against Postgres)
// ============================================================================

#[tokio::test]
async fn test_service_rules_against_postgres() {
    let db = TestDatabase::new().await;
    let service = UserService::new(PgUserRepository::new(db.connection()));

    let ana = service
        .create(new_user("Ana".to_string(), "a@x.com".to_string(), "p1"))
        .await
        .unwrap();
    let bea = service
        .create(new_user("Bea".to_string(), "b@x.com".to_string(), "p2"))
        .await
        .unwrap();

    // Duplicate create is rejected before insert
    let dup = service
        .create(new_user("Cid".to_string(), "a@x.com".to_string(), "p3"))
        .await;
    assert!(matches!(dup, Err(UserError::DuplicateEmail(_))));

    // Own email is fine, another user's is not
    let same = service
        .update(
            ana.id,
            UpdateUser {
                name: Some("Ana B".to_string()),
                email: Some("a@x.com".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(same.name, "Ana B");

    let taken = service
        .update(
            ana.id,
            UpdateUser {
                name: None,
                email: Some("b@x.com".to_string()),
            },
        )
        .await;
    assert!(matches!(taken, Err(UserError::DuplicateEmail(_))));

    // Existence wins over uniqueness
    let missing = service
        .update(
            999,
            UpdateUser {
                name: None,
                email: Some("b@x.com".to_string()),
            },
        )
        .await;
    assert!(matches!(missing, Err(UserError::NotFound(999))));

    let deleted = service.remove(bea.id).await.unwrap();
    assert_eq!(deleted.message, "User deleted successfully");
    assert!(matches!(
        service.remove(bea.id).await,
        Err(UserError::NotFound(_))
    ));

    assert_eq!(service.find_all().await.unwrap().len(), 1);
}
