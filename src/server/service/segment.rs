use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::segment::SegmentRepository,
    error::AppError,
    model::segment::{Segment, UpsertSegmentParam},
};

pub struct SegmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SegmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates a declarative segment
    ///
    /// Rejects definitions whose child references do not resolve, and ids that belong to
    /// a subscription group's internal segment.
    pub async fn upsert(&self, param: UpsertSegmentParam) -> Result<Segment, AppError> {
        if let Some(child) = param.definition.dangling_child() {
            return Err(AppError::BadRequest(format!(
                "Segment definition references unknown node '{}'",
                child
            )));
        }

        let segment_repo = SegmentRepository::new(self.db);

        if segment_repo.is_internal(param.id).await? {
            return Err(AppError::BadRequest(format!(
                "Segment {} is managed by a subscription group",
                param.id
            )));
        }

        segment_repo.upsert(param).await
    }

    /// Deletes a declarative segment, returning false if none matched
    pub async fn delete(&self, workspace_id: Uuid, id: Uuid) -> Result<bool, AppError> {
        SegmentRepository::new(self.db).delete(workspace_id, id).await
    }
}
