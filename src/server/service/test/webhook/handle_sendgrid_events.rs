use super::*;

/// Tests recording a delivered event as a track event.
///
/// Expected: Ok(1) with the SendGrid event id as message id and the mapped event name
#[tokio::test]
async fn records_mapped_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let event = sendgrid_event("delivered", Some(workspace.id.clone()), Some("user-1"));
    let sg_event_id = event.sg_event_id.clone();

    let service = WebhookService::new(db);
    let count = service.handle_sendgrid_events(vec![event]).await?;

    assert_eq!(count, 1);

    let stored = entity::prelude::UserEvent::find().one(db).await?.unwrap();
    assert_eq!(stored.message_id, sg_event_id);
    assert_eq!(stored.user_id, "user-1");
    assert_eq!(stored.event_name.as_deref(), Some("DFEmailDelivered"));

    Ok(())
}

/// Tests that unmapped, untagged and unknown-workspace events are skipped.
///
/// Expected: Ok(0) and nothing stored
#[tokio::test]
async fn skips_unrecordable_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let service = WebhookService::new(db);
    let count = service
        .handle_sendgrid_events(vec![
            sendgrid_event("processed", Some(workspace.id.clone()), Some("user-1")),
            sendgrid_event("open", None, Some("user-1")),
            sendgrid_event("open", Some(workspace.id.clone()), None),
            sendgrid_event("open", Some("not-a-uuid".to_string()), Some("user-1")),
            sendgrid_event("open", Some(Uuid::new_v4().to_string()), Some("user-1")),
        ])
        .await?;

    assert_eq!(count, 0);
    assert_eq!(entity::prelude::UserEvent::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a redelivered batch is not stored twice.
///
/// Expected: one stored event after handling the same batch twice
#[tokio::test]
async fn ignores_redelivered_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let event = sendgrid_event("click", Some(workspace.id.clone()), Some("user-1"));

    let service = WebhookService::new(db);
    service.handle_sendgrid_events(vec![event.clone()]).await?;
    service.handle_sendgrid_events(vec![event]).await?;

    assert_eq!(entity::prelude::UserEvent::find().count(db).await?, 1);

    Ok(())
}
