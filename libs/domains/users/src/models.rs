use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Message returned to callers after a successful delete
pub const DELETED_MESSAGE: &str = "User deleted successfully";

/// User entity - the full stored record
///
/// Single-record reads return every field, including `password`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// System-assigned identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Display name
    pub name: String,
    /// Email address (unique across all users)
    pub email: String,
    /// Password, stored and returned as supplied
    pub password: String,
}

/// Listing projection of a user (never carries the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// DTO for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "The name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "The email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "The password is required"))]
    pub password: String,
}

/// DTO for updating an existing user
///
/// Only the supplied fields are changed; the password is not updatable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, message = "The name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "The email cannot be empty"))]
    pub email: Option<String>,
}

impl UpdateUser {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Confirmation payload for a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeletedUser {
    pub id: i32,
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

impl DeletedUser {
    pub fn new(id: i32) -> Self {
        Self {
            id,
            message: DELETED_MESSAGE.to_string(),
        }
    }
}

/// What a delete did at the storage level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// A row was removed
    Deleted,
    /// No row matched the id
    NotFound,
}

impl User {
    /// Apply a partial update, leaving unsupplied fields untouched
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User {
            id: 1,
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
        }
    }

    #[test]
    fn test_apply_update_merges_only_supplied_fields() {
        let mut user = sample();
        user.apply_update(UpdateUser {
            name: Some("Ana Maria".to_string()),
            email: None,
        });

        assert_eq!(user.name, "Ana Maria");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "p1");
    }

    #[test]
    fn test_summary_serialization_has_no_password() {
        let summary: UserSummary = sample().into();
        let value = serde_json::to_value(&summary).unwrap();

        assert!(value.get("password").is_none());
        assert_eq!(value["email"], "a@x.com");
    }

    #[test]
    fn test_user_serialization_includes_password() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["password"], "p1");
    }

    #[test]
    fn test_create_user_requires_non_empty_fields() {
        let input = CreateUser {
            name: String::new(),
            email: "a@x.com".to_string(),
            password: String::new(),
        };

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("email"));
    }

    #[test]
    fn test_update_user_allows_omitted_fields() {
        let input = UpdateUser::default();
        assert!(input.validate().is_ok());
        assert!(input.is_empty());

        let input = UpdateUser {
            name: Some(String::new()),
            email: None,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_deleted_user_carries_confirmation() {
        let deleted = DeletedUser::new(7);
        assert_eq!(deleted.id, 7);
        assert_eq!(deleted.message, DELETED_MESSAGE);
    }
}
