//! User property data repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::user_property::{UpsertUserPropertyParam, UserProperty},
};

pub struct UserPropertyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPropertyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user property by id.
    ///
    /// # Returns
    /// - `Ok(UserProperty)` - The stored property
    /// - `Err(AppError::DbErr)` - Insert failed, e.g. the name is taken in the workspace
    pub async fn upsert(&self, param: UpsertUserPropertyParam) -> Result<UserProperty, AppError> {
        let definition = serde_json::to_value(&param.definition)?;

        let entity = entity::prelude::UserProperty::insert(entity::user_property::ActiveModel {
            id: ActiveValue::Set(param.id.to_string()),
            workspace_id: ActiveValue::Set(param.workspace_id.to_string()),
            name: ActiveValue::Set(param.name),
            definition: ActiveValue::Set(definition),
        })
        .on_conflict(
            OnConflict::column(entity::user_property::Column::Id)
                .update_columns([
                    entity::user_property::Column::Name,
                    entity::user_property::Column::Definition,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        UserProperty::from_entity(entity)
    }

    /// Deletes a user property and, through the cascading foreign key, its assignments.
    ///
    /// # Returns
    /// - `Ok(true)` - Property deleted
    /// - `Ok(false)` - No property with that id in the workspace
    pub async fn delete(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = entity::prelude::UserProperty::delete_many()
            .filter(entity::user_property::Column::Id.eq(id.to_string()))
            .filter(entity::user_property::Column::WorkspaceId.eq(workspace_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
