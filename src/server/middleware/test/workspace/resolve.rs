use super::*;

/// Tests resolving the workspace named by the header.
///
/// Expected: Ok(Workspace) matching the header id
#[tokio::test]
async fn resolves_workspace_from_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let guard = WorkspaceGuard::new(db, "Default");
    let resolved = guard.resolve(&workspace_header(&workspace.id)).await?;

    assert_eq!(resolved.id.to_string(), workspace.id);
    assert_eq!(resolved.name, workspace.name);

    Ok(())
}

/// Tests falling back to the default workspace name.
///
/// Expected: Ok(Workspace) named after the configured default
#[tokio::test]
async fn falls_back_to_default_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_workspace(db).await?;
    let default = factory::workspace::WorkspaceFactory::new(db)
        .name("Default")
        .build()
        .await?;

    let guard = WorkspaceGuard::new(db, "Default");
    let resolved = guard.resolve(&HeaderMap::new()).await?;

    assert_eq!(resolved.id.to_string(), default.id);

    Ok(())
}

/// Tests that a non-UUID header is a client error.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_uuid_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = WorkspaceGuard::new(db, "Default");
    let result = guard.resolve(&workspace_header("workspace-1")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests an unknown header id and a missing default workspace.
///
/// Expected: Err(NotFound) for both
#[tokio::test]
async fn unknown_workspace_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guard = WorkspaceGuard::new(db, "Default");

    let by_header = guard
        .resolve(&workspace_header(&Uuid::new_v4().to_string()))
        .await;
    assert!(matches!(by_header, Err(AppError::NotFound(_))));

    let by_default = guard.resolve(&HeaderMap::new()).await;
    assert!(matches!(by_default, Err(AppError::NotFound(_))));

    Ok(())
}
