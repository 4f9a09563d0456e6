use super::*;

/// Tests finding a stored journey.
///
/// Expected: Ok(Some) with the decoded definition
#[tokio::test]
async fn finds_journey_in_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let journey = factory::create_journey(db, &workspace.id).await?;

    let repo = JourneyRepository::new(db);
    let found = repo
        .find_by_id(workspace.id.parse().unwrap(), journey.id.parse().unwrap())
        .await?
        .unwrap();

    assert_eq!(found.name, journey.name);
    assert_eq!(found.definition.nodes.len(), 2);

    Ok(())
}

/// Tests that journeys of another workspace are not visible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let other = factory::create_workspace(db).await?;
    let journey = factory::create_journey(db, &other.id).await?;

    let repo = JourneyRepository::new(db);
    let found = repo
        .find_by_id(workspace.id.parse().unwrap(), journey.id.parse().unwrap())
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that a definition with a dangling child reference fails to convert.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_dangling_child() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let journey = factory::journey::JourneyFactory::new(db, &workspace.id)
        .definition(fixture::journey::invalid_definition())
        .build()
        .await?;

    let repo = JourneyRepository::new(db);
    let result = repo
        .find_by_id(workspace.id.parse().unwrap(), journey.id.parse().unwrap())
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
