use super::*;

/// Tests that a non-UUID journey id has no page.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_non_uuid_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = workspace(db).await?;

    let service = DashboardService::new(db);
    let result = service.journey_page(workspace, "not-a-uuid").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the page for a journey that does not exist yet.
///
/// Expected: Ok(Some) with no journeys, the blank editor graph and every template
#[tokio::test]
async fn missing_journey_uses_default_editor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = workspace(db).await?;
    let workspace_id = workspace.id.to_string();
    factory::create_email_template(db, &workspace_id).await?;
    factory::create_email_template(db, &workspace_id).await?;
    let journey_id = Uuid::new_v4().to_string();

    let service = DashboardService::new(db);
    let state = service
        .journey_page(workspace, &journey_id)
        .await?
        .unwrap();

    assert!(state.journeys.is_none());
    assert_eq!(state.editor.journey_name, format!("New Journey - {}", journey_id));
    assert_eq!(state.editor.journey_nodes.len(), 2);
    assert_eq!(state.editor.journey_edges.len(), 1);
    assert_eq!(state.editor.journey_edges[0].source, ENTRY_NODE_ID);
    assert_eq!(state.editor.journey_edges[0].target, EXIT_NODE_ID);

    let CompletionStatus::Successful(messages) = state.messages;
    assert_eq!(messages.len(), 2);
    let CompletionStatus::Successful(segments) = state.segments.unwrap();
    assert!(segments.is_empty());

    Ok(())
}

/// Tests the page for a stored journey.
///
/// Expected: Ok(Some) with the journey in `journeys` and its graph in the editor
#[tokio::test]
async fn stored_journey_populates_editor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = workspace(db).await?;
    let journey = factory::journey::JourneyFactory::new(db, workspace.id.to_string())
        .name("Onboarding")
        .build()
        .await?;

    let service = DashboardService::new(db);
    let state = service
        .journey_page(workspace, &journey.id)
        .await?
        .unwrap();

    let CompletionStatus::Successful(journeys) = state.journeys.unwrap();
    assert_eq!(journeys.len(), 1);
    assert_eq!(journeys[0].id.to_string(), journey.id);

    assert_eq!(state.editor.journey_name, "Onboarding");
    let node_ids: Vec<&str> = state
        .editor
        .journey_nodes
        .iter()
        .map(|node| node.id.as_str())
        .collect();
    assert_eq!(
        node_ids,
        vec![ENTRY_NODE_ID, "message-1", "delay-1", EXIT_NODE_ID]
    );
    assert_eq!(state.editor.journey_nodes_index["delay-1"], 2);

    Ok(())
}

/// Tests that one unconvertible segment drops the segment list only.
///
/// Expected: Ok(Some) with `segments` omitted and the rest of the page intact
#[tokio::test]
async fn invalid_segment_omits_segments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = workspace(db).await?;
    let workspace_id = workspace.id.to_string();
    factory::create_segment(db, &workspace_id).await?;
    factory::segment::SegmentFactory::new(db, &workspace_id)
        .definition(fixture::segment::invalid_definition())
        .build()
        .await?;
    let journey = factory::create_journey(db, &workspace_id).await?;

    let service = DashboardService::new(db);
    let state = service
        .journey_page(workspace, &journey.id)
        .await?
        .unwrap();

    assert!(state.segments.is_none());
    assert!(state.journeys.is_some());

    Ok(())
}

/// Tests that an unconvertible journey falls back to the blank editor.
///
/// Expected: Ok(Some) with no journeys and the `New Journey - {id}` graph
#[tokio::test]
async fn invalid_journey_uses_default_editor() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = workspace(db).await?;
    let journey = factory::journey::JourneyFactory::new(db, workspace.id.to_string())
        .definition(fixture::journey::invalid_definition())
        .build()
        .await?;

    let service = DashboardService::new(db);
    let state = service
        .journey_page(workspace, &journey.id)
        .await?
        .unwrap();

    assert!(state.journeys.is_none());
    assert_eq!(
        state.editor.journey_name,
        format!("New Journey - {}", journey.id)
    );

    Ok(())
}

/// Tests that a journey in another workspace is not loaded.
///
/// Expected: Ok(Some) with the default editor
#[tokio::test]
async fn ignores_journey_from_other_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = workspace(db).await?;
    let other = factory::create_workspace(db).await?;
    let journey = factory::create_journey(db, &other.id).await?;

    let service = DashboardService::new(db);
    let state = service
        .journey_page(workspace, &journey.id)
        .await?
        .unwrap();

    assert!(state.journeys.is_none());

    Ok(())
}
