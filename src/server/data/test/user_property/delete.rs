use super::*;

/// Tests that deleting only removes properties of the given workspace.
///
/// Expected: Ok(false) from another workspace, Ok(true) from the owner, then Ok(false)
#[tokio::test]
async fn delete_is_scoped_to_workspace() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let other = factory::create_workspace(db).await?;
    let property = factory::create_user_property(db, &workspace.id).await?;
    let property_id: Uuid = property.id.parse().unwrap();

    let repo = UserPropertyRepository::new(db);

    assert!(!repo.delete(other.id.parse().unwrap(), property_id).await?);
    assert_eq!(entity::prelude::UserProperty::find().count(db).await?, 1);
    assert!(repo.delete(workspace.id.parse().unwrap(), property_id).await?);
    assert!(!repo.delete(workspace.id.parse().unwrap(), property_id).await?);

    Ok(())
}
