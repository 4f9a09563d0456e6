use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user_event::UserEventRepository, error::AppError,
    model::user_event::PaginatedUserEvents, util::pagination::total_pages,
};

pub struct UserEventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserEventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated events of a workspace, newest first
    pub async fn get_paginated(
        &self,
        workspace_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUserEvents, AppError> {
        let (events, total) = UserEventRepository::new(self.db)
            .get_paginated_by_workspace(workspace_id, page, per_page)
            .await?;

        Ok(PaginatedUserEvents {
            events,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
