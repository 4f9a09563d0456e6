use sea_orm::DatabaseConnection;

use crate::server::{
    data::email_provider::EmailProviderRepository,
    error::AppError,
    model::email_provider::{EmailProvider, UpsertEmailProviderParam},
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates the workspace's email provider of the given type
    pub async fn upsert_email_provider(
        &self,
        param: UpsertEmailProviderParam,
    ) -> Result<EmailProvider, AppError> {
        EmailProviderRepository::new(self.db).upsert(param).await
    }
}
