use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, DeleteOutcome, UpdateUser, User, UserSummary};

/// Repository trait for User persistence
///
/// Every method is a single direct storage operation; business rules live
/// in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user, the id is assigned by storage
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>>;

    /// Get a user by exact email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// List every user as a summary, in storage order
    async fn list(&self) -> UserResult<Vec<UserSummary>>;

    /// Update only the supplied fields of an existing user
    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User>;

    /// Delete a user by ID
    async fn delete(&self, id: i32) -> UserResult<DeleteOutcome>;
}

#[derive(Debug)]
struct Store {
    users: BTreeMap<i32, User>,
    next_id: i32,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of UserRepository (for development/testing)
///
/// Mirrors the table's unique email constraint so it behaves like the
/// Postgres gateway when the service pre-check is bypassed.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.email == input.email) {
            return Err(UserError::DuplicateEmail(input.email));
        }

        let id = store.next_id;
        store.next_id += 1;

        let user = User {
            id,
            name: input.name,
            email: input.email,
            password: input.password,
        };
        store.users.insert(id, user.clone());

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> UserResult<Vec<UserSummary>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().map(UserSummary::from).collect())
    }

    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&id) {
            return Err(UserError::NotFound(id));
        }

        if let Some(ref new_email) = input.email {
            let taken = store
                .users
                .values()
                .any(|u| u.id != id && u.email == *new_email);
            if taken {
                return Err(UserError::DuplicateEmail(new_email.clone()));
            }
        }

        let user = store.users.get_mut(&id).ok_or(UserError::NotFound(id))?;
        user.apply_update(input);
        let updated = user.clone();

        tracing::info!(user_id = id, "Updated user");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> UserResult<DeleteOutcome> {
        let mut store = self.store.write().await;

        if store.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}
