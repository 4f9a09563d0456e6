use super::*;

/// Tests that events are listed newest first with decoded payloads.
///
/// Expected: Ok with the later track event before the earlier identify event
#[tokio::test]
async fn lists_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let workspace_id: Uuid = workspace.id.parse().unwrap();

    let earlier = Utc::now() - Duration::minutes(5);
    let older = InsertUserEvent::identify(
        "m-old".to_string(),
        "user-1".to_string(),
        Map::new(),
        earlier,
    )
    .unwrap();
    let newer = InsertUserEvent::track(
        "m-new".to_string(),
        "user-1".to_string(),
        "Signed Up",
        json!({}),
        Utc::now(),
    )
    .unwrap();

    let repo = UserEventRepository::new(db);
    repo.insert_many(workspace_id, vec![older, newer]).await?;

    let (events, total) = repo.get_paginated_by_workspace(workspace_id, 0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(events[0].message_id, "m-new");
    assert_eq!(events[0].event_name.as_deref(), Some("Signed Up"));
    assert_eq!(events[0].payload["type"], "track");
    assert_eq!(events[1].message_id, "m-old");

    Ok(())
}

/// Tests that events of other workspaces are excluded.
///
/// Expected: Ok with zero events
#[tokio::test]
async fn excludes_other_workspaces() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let other = factory::create_workspace(db).await?;

    let repo = UserEventRepository::new(db);
    repo.insert_many(other.id.parse().unwrap(), vec![identify("m-1", "user-1")])
        .await?;

    let (events, total) = repo
        .get_paginated_by_workspace(workspace.id.parse().unwrap(), 0, 10)
        .await?;

    assert_eq!(total, 0);
    assert!(events.is_empty());

    Ok(())
}
