//! Email provider settings data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::email_provider::{EmailProvider, UpsertEmailProviderParam},
};

pub struct EmailProviderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmailProviderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the workspace's provider of the given type.
    ///
    /// A workspace has at most one provider per type. An existing provider keeps its id
    /// and only has its API key replaced.
    ///
    /// # Returns
    /// - `Ok(EmailProvider)` - The stored provider
    /// - `Err(AppError::DbErr)` - Database error during lookup or write
    pub async fn upsert(&self, param: UpsertEmailProviderParam) -> Result<EmailProvider, AppError> {
        let workspace_id = param.workspace_id.to_string();
        let provider_type = param.provider_type.as_str();

        let existing = entity::prelude::EmailProvider::find()
            .filter(entity::email_provider::Column::WorkspaceId.eq(&workspace_id))
            .filter(entity::email_provider::Column::ProviderType.eq(provider_type))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active = existing.into_active_model();
                active.api_key = ActiveValue::Set(param.api_key);
                active.update(self.db).await?
            }
            None => {
                entity::email_provider::ActiveModel {
                    id: ActiveValue::Set(Uuid::new_v4().to_string()),
                    workspace_id: ActiveValue::Set(workspace_id),
                    provider_type: ActiveValue::Set(provider_type.to_string()),
                    api_key: ActiveValue::Set(param.api_key),
                }
                .insert(self.db)
                .await?
            }
        };

        EmailProvider::from_entity(entity)
    }
}
