use super::*;

/// Tests that a new journey without a status starts as NotStarted.
///
/// Expected: Ok with status NotStarted
#[tokio::test]
async fn defaults_status_on_create() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let repo = JourneyRepository::new(db);
    let journey = repo
        .upsert(UpsertJourneyParam {
            id: Uuid::new_v4(),
            workspace_id: workspace.id.parse().unwrap(),
            name: "Onboarding".to_string(),
            status: None,
            definition: definition(),
        })
        .await?;

    assert_eq!(journey.status, JourneyStatus::NotStarted);
    assert_eq!(journey.name, "Onboarding");

    Ok(())
}

/// Tests that omitting the status on update preserves the stored status.
///
/// Expected: Ok with status still Running after a status-less update
#[tokio::test]
async fn preserves_status_when_omitted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let workspace_id: Uuid = workspace.id.parse().unwrap();
    let id = Uuid::new_v4();

    let repo = JourneyRepository::new(db);
    repo.upsert(UpsertJourneyParam {
        id,
        workspace_id,
        name: "Onboarding".to_string(),
        status: Some(JourneyStatus::Running),
        definition: definition(),
    })
    .await?;

    let updated = repo
        .upsert(UpsertJourneyParam {
            id,
            workspace_id,
            name: "Onboarding v2".to_string(),
            status: None,
            definition: definition(),
        })
        .await?;

    assert_eq!(updated.status, JourneyStatus::Running);
    assert_eq!(updated.name, "Onboarding v2");

    Ok(())
}
