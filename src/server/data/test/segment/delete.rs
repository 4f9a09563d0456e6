use super::*;

/// Tests deleting a declarative segment.
///
/// Expected: Ok(true) on the first delete, Ok(false) on the second
#[tokio::test]
async fn deletes_declarative_segment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let segment = factory::create_segment(db, &workspace.id).await?;

    let repo = SegmentRepository::new(db);
    let workspace_id = workspace.id.parse().unwrap();
    let segment_id = segment.id.parse().unwrap();

    assert!(repo.delete(workspace_id, segment_id).await?);
    assert!(!repo.delete(workspace_id, segment_id).await?);

    Ok(())
}

/// Tests that internal segments cannot be deleted.
///
/// Expected: Ok(false) with the segment still stored
#[tokio::test]
async fn does_not_delete_internal_segment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let segment = factory::segment::SegmentFactory::new(db, &workspace.id)
        .resource_type("Internal")
        .build()
        .await?;

    let repo = SegmentRepository::new(db);
    let deleted = repo
        .delete(workspace.id.parse().unwrap(), segment.id.parse().unwrap())
        .await?;

    assert!(!deleted);

    Ok(())
}
