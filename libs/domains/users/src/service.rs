use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, DeleteOutcome, DeletedUser, UpdateUser, User, UserSummary};
use crate::repository::UserRepository;

/// Service layer for User business logic
///
/// Holds no state of its own; all state lives behind the repository.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user, rejecting an email that is already taken
    pub async fn create(&self, input: CreateUser) -> UserResult<User> {
        if self.repository.get_by_email(&input.email).await?.is_some() {
            tracing::debug!(email = %input.email, "Rejected create with duplicate email");
            return Err(UserError::DuplicateEmail(input.email));
        }

        self.repository.create(input).await
    }

    /// List all users without their passwords
    pub async fn find_all(&self) -> UserResult<Vec<UserSummary>> {
        self.repository.list().await
    }

    /// Get a user by ID
    pub async fn find_one(&self, id: i32) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Update a user
    ///
    /// Existence is checked before email uniqueness, so an unknown id is
    /// always `NotFound` even when the email would collide.
    pub async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let existing = self.find_one(id).await?;

        if let Some(ref new_email) = input.email {
            if *new_email != existing.email {
                let holder = self.repository.get_by_email(new_email).await?;
                if holder.is_some_and(|other| other.id != id) {
                    tracing::debug!(user_id = id, email = %new_email, "Rejected update with duplicate email");
                    return Err(UserError::DuplicateEmail(new_email.clone()));
                }
            }
        }

        self.repository.update(id, input).await
    }

    /// Delete a user
    pub async fn remove(&self, id: i32) -> UserResult<DeletedUser> {
        match self.repository.delete(id).await? {
            DeleteOutcome::Deleted => Ok(DeletedUser::new(id)),
            DeleteOutcome::NotFound => Err(UserError::NotFound(id)),
        }
    }
}
