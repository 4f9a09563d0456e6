use super::*;

/// Tests creating a user property and updating it by id.
///
/// Expected: Ok with a single stored property carrying the second name and definition
#[tokio::test]
async fn creates_then_replaces_property() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let workspace_id: Uuid = workspace.id.parse().unwrap();
    let id = Uuid::new_v4();

    let repo = UserPropertyRepository::new(db);
    let created = repo
        .upsert(UpsertUserPropertyParam {
            id,
            workspace_id,
            name: "email".to_string(),
            definition: UserPropertyDefinition::Trait {
                path: "email".to_string(),
            },
        })
        .await?;
    assert_eq!(created.name, "email");

    let updated = repo
        .upsert(UpsertUserPropertyParam {
            id,
            workspace_id,
            name: "userId".to_string(),
            definition: UserPropertyDefinition::Id,
        })
        .await?;

    assert_eq!(updated.name, "userId");
    assert_eq!(updated.definition, UserPropertyDefinition::Id);
    assert_eq!(entity::prelude::UserProperty::find().count(db).await?, 1);

    Ok(())
}
