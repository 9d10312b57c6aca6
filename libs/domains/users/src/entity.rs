use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{CreateUser, UpdateUser, User};

/// Sea-ORM Entity for the users table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password: model.password,
        }
    }
}

// The id is left to the table sequence
impl From<CreateUser> for ActiveModel {
    fn from(input: CreateUser) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email),
            password: Set(input.password),
        }
    }
}

impl ActiveModel {
    /// Build an ActiveModel that touches only the supplied columns
    pub fn for_update(id: i32, input: UpdateUser) -> Self {
        ActiveModel {
            id: Set(id),
            name: input.name.map_or(NotSet, Set),
            email: input.email.map_or(NotSet, Set),
            password: NotSet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_update_sets_only_supplied_columns() {
        let model = ActiveModel::for_update(
            3,
            UpdateUser {
                name: None,
                email: Some("new@x.com".to_string()),
            },
        );

        assert_eq!(model.id, Set(3));
        assert_eq!(model.email, Set("new@x.com".to_string()));
        assert!(model.name.is_not_set());
        assert!(model.password.is_not_set());
    }

    #[test]
    fn test_create_leaves_id_to_storage() {
        let model: ActiveModel = CreateUser {
            name: "Ana".to_string(),
            email: "a@x.com".to_string(),
            password: "p1".to_string(),
        }
        .into();

        assert!(model.id.is_not_set());
        assert_eq!(model.password, Set("p1".to_string()));
    }
}
