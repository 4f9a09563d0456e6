use super::*;

/// Tests resolving users by email in one batch.
///
/// Expected: Ok with matched emails mapped to their user ids and unmatched emails absent
#[tokio::test]
async fn resolves_matching_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let (property, _) = factory::helpers::create_email_assignment(
        db,
        &workspace.id,
        "user-1",
        "one@example.com",
    )
    .await?;
    factory::create_user_property_assignment(
        db,
        &workspace.id,
        &property.id,
        "user-2",
        "two@example.com",
    )
    .await?;

    let repo = UserPropertyAssignmentRepository::new(db);
    let result = repo
        .find_user_ids_by_value(
            workspace.id.parse().unwrap(),
            "email",
            &["one@example.com".to_string(), "missing@example.com".to_string()],
        )
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result["one@example.com"], vec!["user-1".to_string()]);

    Ok(())
}

/// Tests that values of other properties do not match.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn ignores_other_properties() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let property = factory::user_property::UserPropertyFactory::new(db, &workspace.id)
        .name("secondaryEmail")
        .build()
        .await?;
    factory::create_user_property_assignment(
        db,
        &workspace.id,
        &property.id,
        "user-1",
        "one@example.com",
    )
    .await?;

    let repo = UserPropertyAssignmentRepository::new(db);
    let result = repo
        .find_user_ids_by_value(
            workspace.id.parse().unwrap(),
            "email",
            &["one@example.com".to_string()],
        )
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests that an empty value list short-circuits.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_for_no_values() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let repo = UserPropertyAssignmentRepository::new(db);
    let result = repo
        .find_user_ids_by_value(workspace.id.parse().unwrap(), "email", &[])
        .await?;

    assert!(result.is_empty());

    Ok(())
}

/// Tests resolving more values than one lookup query binds.
///
/// Expected: Ok with the value near the end of the batch resolved
#[tokio::test]
async fn resolves_large_value_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    factory::helpers::create_email_assignment(db, &workspace.id, "user-1", "u39999@example.com")
        .await?;
    let values: Vec<String> = (0..40_000)
        .map(|i| format!("u{}@example.com", i))
        .collect();

    let repo = UserPropertyAssignmentRepository::new(db);
    let result = repo
        .find_user_ids_by_value(workspace.id.parse().unwrap(), "email", &values)
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result["u39999@example.com"], vec!["user-1".to_string()]);

    Ok(())
}
