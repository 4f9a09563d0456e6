use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::email_template::EmailTemplateRepository,
    error::AppError,
    model::email_template::{EmailTemplate, UpsertEmailTemplateParam},
};

pub struct ContentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates an email template
    pub async fn upsert_template(
        &self,
        param: UpsertEmailTemplateParam,
    ) -> Result<EmailTemplate, AppError> {
        EmailTemplateRepository::new(self.db).upsert(param).await
    }

    /// Deletes an email template, returning false if none matched
    pub async fn delete_template(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        EmailTemplateRepository::new(self.db)
            .delete(workspace_id, id)
            .await
    }
}
