use super::*;

/// Tests creating then updating a declarative segment.
///
/// Expected: Ok with the second upsert replacing name and definition
#[tokio::test]
async fn creates_then_updates_segment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_subscription_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let workspace_id: Uuid = workspace.id.parse().unwrap();

    let repo = SegmentRepository::new(db);
    let id = Uuid::new_v4();
    let created = repo
        .upsert(UpsertSegmentParam {
            id,
            workspace_id,
            name: "Premium".to_string(),
            definition: trait_definition("premium"),
        })
        .await?;

    assert_eq!(created.resource_type, SegmentResourceType::Declarative);
    assert_eq!(created.definition, trait_definition("premium"));

    let updated = repo
        .upsert(UpsertSegmentParam {
            id,
            workspace_id,
            name: "Enterprise".to_string(),
            definition: trait_definition("enterprise"),
        })
        .await?;

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, "Enterprise");
    assert_eq!(updated.definition, trait_definition("enterprise"));

    Ok(())
}
