//! User property assignment factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns `value` of the given property to `user_id`.
///
/// # Returns
/// - `Ok(entity::user_property_assignment::Model)` - Created assignment
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_property_assignment(
    db: &DatabaseConnection,
    workspace_id: &str,
    user_property_id: &str,
    user_id: &str,
    value: &str,
) -> Result<entity::user_property_assignment::Model, DbErr> {
    entity::user_property_assignment::ActiveModel {
        id: ActiveValue::NotSet,
        workspace_id: ActiveValue::Set(workspace_id.to_string()),
        user_property_id: ActiveValue::Set(user_property_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        value: ActiveValue::Set(value.to_string()),
    }
    .insert(db)
    .await
}
