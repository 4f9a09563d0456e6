use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user_property::UserPropertyRepository,
    error::AppError,
    model::user_property::{UpsertUserPropertyParam, UserProperty},
};

pub struct UserPropertyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPropertyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a user property
    pub async fn upsert(&self, param: UpsertUserPropertyParam) -> Result<UserProperty, AppError> {
        UserPropertyRepository::new(self.db).upsert(param).await
    }

    /// Deletes a user property and its assignments, returning false if none matched
    pub async fn delete(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        UserPropertyRepository::new(self.db)
            .delete(workspace_id, id)
            .await
    }
}
