use super::*;

/// Tests deleting a journey scoped to its workspace.
///
/// Expected: Ok(false) from another workspace, then Ok(true) from the owner
#[tokio::test]
async fn deletes_only_within_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let other = factory::create_workspace(db).await?;
    let journey = factory::create_journey(db, &workspace.id).await?;
    let journey_id = journey.id.parse().unwrap();

    let repo = JourneyRepository::new(db);

    assert!(!repo.delete(other.id.parse().unwrap(), journey_id).await?);
    assert!(repo.delete(workspace.id.parse().unwrap(), journey_id).await?);

    Ok(())
}
