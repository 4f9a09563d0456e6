use super::*;

fn param(workspace_id: &str, id: Uuid, name: &str) -> UpsertSubscriptionGroupParam {
    UpsertSubscriptionGroupParam {
        id,
        workspace_id: workspace_id.parse().unwrap(),
        name: name.to_string(),
        group_type: SubscriptionGroupType::OptIn,
    }
}

/// Tests creating a subscription group with its internal segment.
///
/// Expected: Ok with the group stored and one internal segment referencing it
#[tokio::test]
async fn creates_group_and_internal_segment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let id = Uuid::new_v4();
    let repo = SubscriptionGroupRepository::new(db);
    let group = repo.upsert(param(&workspace.id, id, "Newsletter")).await?;

    assert_eq!(group.id, id);
    assert_eq!(group.name, "Newsletter");
    assert_eq!(group.group_type, SubscriptionGroupType::OptIn);

    let segment = entity::prelude::Segment::find()
        .filter(entity::segment::Column::Name.eq(shadow_segment_name(&id)))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(segment.resource_type, "Internal");
    assert_eq!(segment.subscription_group_id, Some(id.to_string()));
    assert_eq!(
        segment.definition,
        test_utils::fixture::segment::subscription_group_definition(&id.to_string())
    );

    Ok(())
}

/// Tests upserting the same group id twice.
///
/// Verifies that the second upsert updates name and type without creating a second
/// segment or touching the existing segment's definition.
///
/// Expected: Ok with one group, one segment and the original segment definition
#[tokio::test]
async fn second_upsert_updates_group_and_keeps_segment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let id = Uuid::new_v4();
    let repo = SubscriptionGroupRepository::new(db);
    repo.upsert(param(&workspace.id, id, "Newsletter")).await?;

    let original_segment = entity::prelude::Segment::find()
        .filter(entity::segment::Column::Name.eq(shadow_segment_name(&id)))
        .one(db)
        .await?
        .unwrap();

    let mut second = param(&workspace.id, id, "Weekly Digest");
    second.group_type = SubscriptionGroupType::OptOut;
    let group = repo.upsert(second).await?;

    assert_eq!(group.name, "Weekly Digest");
    assert_eq!(group.group_type, SubscriptionGroupType::OptOut);
    assert_eq!(entity::prelude::SubscriptionGroup::find().count(db).await?, 1);

    let segments = entity::prelude::Segment::find().all(db).await?;
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0], original_segment);

    Ok(())
}

/// Tests that an existing segment with the shadow name is left untouched.
///
/// Expected: Ok with the pre-existing segment still holding its own definition
#[tokio::test]
async fn keeps_preexisting_segment_with_shadow_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let id = Uuid::new_v4();
    let existing = factory::segment::SegmentFactory::new(db, &workspace.id)
        .name(shadow_segment_name(&id))
        .build()
        .await?;

    let repo = SubscriptionGroupRepository::new(db);
    repo.upsert(param(&workspace.id, id, "Newsletter")).await?;

    let segments = entity::prelude::Segment::find().all(db).await?;
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].definition, existing.definition);

    Ok(())
}

/// Tests that a failed segment write rolls back the group write.
///
/// The workspace does not exist, so the foreign key on the group insert fails and
/// nothing is persisted.
///
/// Expected: Err with no subscription group and no segment stored
#[tokio::test]
async fn rolls_back_when_write_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubscriptionGroupRepository::new(db);
    let result = repo
        .upsert(param(&Uuid::new_v4().to_string(), Uuid::new_v4(), "Orphan"))
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(entity::prelude::SubscriptionGroup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Segment::find().count(db).await?, 0);

    Ok(())
}
