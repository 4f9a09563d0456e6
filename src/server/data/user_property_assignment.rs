//! User property assignment data repository.
//!
//! Assignments are the computed value of one user property for one user. They are read
//! here to resolve users by a property value and to list users; computing them is done
//! elsewhere.

use std::collections::{BTreeMap, HashMap};

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::server::{error::AppError, model::user::User};

/// Maximum number of values bound into one lookup query.
const LOOKUP_CHUNK_SIZE: usize = 1000;

/// Repository providing read access to user property assignments.
pub struct UserPropertyAssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserPropertyAssignmentRepository<'a> {
    /// Creates a new UserPropertyAssignmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserPropertyAssignmentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the users whose value for the named property is one of `values`.
    ///
    /// Queries assignments joined with their property, `LOOKUP_CHUNK_SIZE` values at a
    /// time. User ids for each value are returned in insertion order.
    ///
    /// # Arguments
    /// - `workspace_id` - Workspace to search
    /// - `property_name` - Name of the user property, e.g. `email`
    /// - `values` - Values to look up
    ///
    /// # Returns
    /// - `Ok(HashMap<value, user_ids>)` - Matching users keyed by value; values with no
    ///   match are absent. Returns early with an empty map when `values` is empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_user_ids_by_value(
        &self,
        workspace_id: Uuid,
        property_name: &str,
        values: &[String],
    ) -> Result<HashMap<String, Vec<String>>, AppError> {
        if values.is_empty() {
            return Ok(HashMap::new());
        }

        let workspace_id = workspace_id.to_string();
        let mut user_ids_by_value: HashMap<String, Vec<String>> = HashMap::new();

        for chunk in values.chunks(LOOKUP_CHUNK_SIZE) {
            let assignments = entity::prelude::UserPropertyAssignment::find()
                .inner_join(entity::prelude::UserProperty)
                .filter(entity::user_property_assignment::Column::WorkspaceId.eq(&workspace_id))
                .filter(entity::user_property::Column::Name.eq(property_name))
                .filter(entity::user_property_assignment::Column::Value.is_in(chunk.to_vec()))
                .order_by_asc(entity::user_property_assignment::Column::Id)
                .all(self.db)
                .await?;

            for assignment in assignments {
                user_ids_by_value
                    .entry(assignment.value)
                    .or_default()
                    .push(assignment.user_id);
            }
        }

        Ok(user_ids_by_value)
    }

    /// Gets the distinct users of a workspace with pagination.
    ///
    /// A user is any id with at least one assignment. Users are ordered by id and carry
    /// every assigned value keyed by property name.
    ///
    /// # Arguments
    /// - `workspace_id` - Workspace to list
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total distinct users
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_users_paginated(
        &self,
        workspace_id: Uuid,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let workspace_id = workspace_id.to_string();

        let paginator = entity::prelude::UserPropertyAssignment::find()
            .select_only()
            .column(entity::user_property_assignment::Column::UserId)
            .distinct()
            .filter(entity::user_property_assignment::Column::WorkspaceId.eq(&workspace_id))
            .order_by_asc(entity::user_property_assignment::Column::UserId)
            .into_tuple::<String>()
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let user_ids = paginator.fetch_page(page).await?;

        if user_ids.is_empty() {
            return Ok((Vec::new(), total));
        }

        let rows = entity::prelude::UserPropertyAssignment::find()
            .find_also_related(entity::prelude::UserProperty)
            .filter(entity::user_property_assignment::Column::WorkspaceId.eq(&workspace_id))
            .filter(entity::user_property_assignment::Column::UserId.is_in(user_ids.clone()))
            .all(self.db)
            .await?;

        let mut properties_by_user: HashMap<String, BTreeMap<String, String>> = HashMap::new();
        for (assignment, property) in rows {
            let Some(property) = property else { continue };
            properties_by_user
                .entry(assignment.user_id)
                .or_default()
                .insert(property.name, assignment.value);
        }

        let users = user_ids
            .into_iter()
            .map(|id| User {
                properties: properties_by_user.remove(&id).unwrap_or_default(),
                id,
            })
            .collect();

        Ok((users, total))
    }
}
