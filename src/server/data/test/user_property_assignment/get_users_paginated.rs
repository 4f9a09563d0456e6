use super::*;

/// Tests listing distinct users with their property values.
///
/// Expected: Ok with two users ordered by id, each carrying all assigned values
#[tokio::test]
async fn groups_assignments_by_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let (_, _) =
        factory::helpers::create_email_assignment(db, &workspace.id, "user-b", "b@example.com")
            .await?;
    let plan = factory::user_property::UserPropertyFactory::new(db, &workspace.id)
        .name("plan")
        .build()
        .await?;
    factory::create_user_property_assignment(db, &workspace.id, &plan.id, "user-b", "pro")
        .await?;
    factory::create_user_property_assignment(db, &workspace.id, &plan.id, "user-a", "free")
        .await?;

    let repo = UserPropertyAssignmentRepository::new(db);
    let (users, total) = repo
        .get_users_paginated(workspace.id.parse().unwrap(), 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, "user-a");
    assert_eq!(users[0].properties.get("plan").map(String::as_str), Some("free"));
    assert_eq!(users[1].id, "user-b");
    assert_eq!(users[1].properties.len(), 2);

    Ok(())
}

/// Tests paging through users.
///
/// Expected: Ok with one user on the second page of size one
#[tokio::test]
async fn paginates_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let plan = factory::create_user_property(db, &workspace.id).await?;
    for user_id in ["user-1", "user-2", "user-3"] {
        factory::create_user_property_assignment(db, &workspace.id, &plan.id, user_id, "pro")
            .await?;
    }

    let repo = UserPropertyAssignmentRepository::new(db);
    let (users, total) = repo
        .get_users_paginated(workspace.id.parse().unwrap(), 1, 1)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, "user-2");

    Ok(())
}
