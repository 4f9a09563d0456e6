//! Email template data repository.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::server::{
    error::AppError,
    model::email_template::{EmailTemplate, UpsertEmailTemplateParam},
};

pub struct EmailTemplateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmailTemplateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts an email template by id, replacing every content field on conflict.
    pub async fn upsert(&self, param: UpsertEmailTemplateParam) -> Result<EmailTemplate, AppError> {
        let entity = entity::prelude::EmailTemplate::insert(entity::email_template::ActiveModel {
            id: ActiveValue::Set(param.id.to_string()),
            workspace_id: ActiveValue::Set(param.workspace_id.to_string()),
            name: ActiveValue::Set(param.name),
            from_address: ActiveValue::Set(param.from),
            subject: ActiveValue::Set(param.subject),
            body: ActiveValue::Set(param.body),
        })
        .on_conflict(
            OnConflict::column(entity::email_template::Column::Id)
                .update_columns([
                    entity::email_template::Column::Name,
                    entity::email_template::Column::FromAddress,
                    entity::email_template::Column::Subject,
                    entity::email_template::Column::Body,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        EmailTemplate::from_entity(entity)
    }

    /// Gets every email template of a workspace ordered by name.
    pub async fn get_all_by_workspace(
        &self,
        workspace_id: Uuid,
    ) -> Result<Vec<EmailTemplate>, AppError> {
        entity::prelude::EmailTemplate::find()
            .filter(entity::email_template::Column::WorkspaceId.eq(workspace_id.to_string()))
            .order_by_asc(entity::email_template::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(EmailTemplate::from_entity)
            .collect()
    }

    /// Deletes a template, returning whether a row in the workspace was removed.
    pub async fn delete(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        let result = entity::prelude::EmailTemplate::delete_many()
            .filter(entity::email_template::Column::Id.eq(id.to_string()))
            .filter(entity::email_template::Column::WorkspaceId.eq(workspace_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
