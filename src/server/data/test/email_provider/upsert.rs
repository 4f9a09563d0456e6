use super::*;

/// Tests that upserting the same provider type twice keeps one row and its id.
///
/// Expected: Ok with the same id and the replaced API key stored
#[tokio::test]
async fn replaces_api_key_of_existing_provider() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let workspace_id = workspace.id.parse().unwrap();

    let repo = EmailProviderRepository::new(db);
    let first = repo
        .upsert(UpsertEmailProviderParam {
            workspace_id,
            provider_type: EmailProviderType::SendGrid,
            api_key: Some("key-1".to_string()),
        })
        .await?;
    let second = repo
        .upsert(UpsertEmailProviderParam {
            workspace_id,
            provider_type: EmailProviderType::SendGrid,
            api_key: Some("key-2".to_string()),
        })
        .await?;

    assert_eq!(first.id, second.id);

    let stored = entity::prelude::EmailProvider::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].api_key.as_deref(), Some("key-2"));

    Ok(())
}
