use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{CreateUser, DeleteOutcome, UpdateUser, User, UserSummary},
    repository::UserRepository,
};

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn internal(e: DbErr) -> UserError {
    UserError::Internal(format!("Database error: {}", e))
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: CreateUser) -> UserResult<User> {
        let email = input.email.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| UserError::from_db(e, &email))?;

        tracing::info!(user_id = model.id, email = %model.email, "Created user");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(|m| m.into()))
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let model = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(internal)?;

        Ok(model.map(|m| m.into()))
    }

    async fn list(&self) -> UserResult<Vec<UserSummary>> {
        entity::Entity::find()
            .select_only()
            .columns([
                entity::Column::Id,
                entity::Column::Name,
                entity::Column::Email,
            ])
            .order_by_asc(entity::Column::Id)
            .into_model::<UserSummary>()
            .all(&self.db)
            .await
            .map_err(internal)
    }

    async fn update(&self, id: i32, input: UpdateUser) -> UserResult<User> {
        if input.is_empty() {
            return self.get_by_id(id).await?.ok_or(UserError::NotFound(id));
        }

        let email = input.email.clone().unwrap_or_default();
        let active_model = entity::ActiveModel::for_update(id, input);

        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => UserError::NotFound(id),
            other => UserError::from_db(other, &email),
        })?;

        tracing::info!(user_id = id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> UserResult<DeleteOutcome> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(internal)?;

        if result.rows_affected > 0 {
            tracing::info!(user_id = id, "Deleted user");
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotFound)
        }
    }
}
