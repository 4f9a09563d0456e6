use super::*;

/// Tests creating a new email template.
///
/// Expected: Ok(EmailTemplate) with the submitted fields stored
#[tokio::test]
async fn creates_template() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let id = Uuid::new_v4();

    let repo = EmailTemplateRepository::new(db);
    let template = repo
        .upsert(template_param(id, workspace.id.parse().unwrap(), "Hello"))
        .await?;

    assert_eq!(template.id, id);
    assert_eq!(template.from, "hello@example.com");
    assert_eq!(template.subject, "Hello");

    let stored = entity::prelude::EmailTemplate::find_by_id(id.to_string())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.from_address, "hello@example.com");

    Ok(())
}

/// Tests that upserting an existing id replaces its content.
///
/// Expected: Ok with one stored template carrying the second subject
#[tokio::test]
async fn replaces_existing_template() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let workspace_id: Uuid = workspace.id.parse().unwrap();
    let id = Uuid::new_v4();

    let repo = EmailTemplateRepository::new(db);
    repo.upsert(template_param(id, workspace_id, "First")).await?;
    let template = repo.upsert(template_param(id, workspace_id, "Second")).await?;

    assert_eq!(template.subject, "Second");
    assert_eq!(entity::prelude::EmailTemplate::find().count(db).await?, 1);

    Ok(())
}
