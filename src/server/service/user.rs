use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user_property_assignment::UserPropertyAssignmentRepository,
    error::AppError,
    model::user::PaginatedUsers,
    util::pagination::total_pages,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated users of a workspace with their property values
    pub async fn get_paginated(
        &self,
        workspace_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserPropertyAssignmentRepository::new(self.db)
            .get_users_paginated(workspace_id, page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }
}
