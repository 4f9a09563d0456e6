use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::journey::JourneyRepository,
    error::AppError,
    model::journey::{validate_definition, Journey, UpsertJourneyParam},
};

pub struct JourneyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JourneyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a journey
    ///
    /// Definitions with a dangling child reference or a duplicated or reserved node id are
    /// rejected as a bad request.
    pub async fn upsert(&self, param: UpsertJourneyParam) -> Result<Journey, AppError> {
        validate_definition(&param.id.to_string(), &param.definition)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        JourneyRepository::new(self.db).upsert(param).await
    }

    /// Deletes a journey, returning false if none matched
    pub async fn delete(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        JourneyRepository::new(self.db).delete(workspace_id, id).await
    }
}
