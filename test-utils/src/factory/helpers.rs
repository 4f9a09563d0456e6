//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh v4 UUID string for use as a record identifier.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creates an `email` user property for the workspace and assigns `email` to `user_id`.
///
/// The upload flow resolves users through `email` assignments, so this sets up an
/// existing user in one call.
///
/// # Returns
/// - `Ok((property, assignment))` - The created property and assignment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_email_assignment(
    db: &DatabaseConnection,
    workspace_id: &str,
    user_id: &str,
    email: &str,
) -> Result<
    (
        entity::user_property::Model,
        entity::user_property_assignment::Model,
    ),
    DbErr,
> {
    let property = crate::factory::user_property::UserPropertyFactory::new(db, workspace_id)
        .name("email")
        .definition(crate::fixture::user_property::trait_definition("email"))
        .build()
        .await?;

    let assignment = crate::factory::user_property_assignment::create_user_property_assignment(
        db,
        workspace_id,
        &property.id,
        user_id,
        email,
    )
    .await?;

    Ok((property, assignment))
}
