use super::*;

/// Tests that each valid row yields a track then an identify event.
///
/// Expected: Ok(4) for two rows, with the track event subscribing the user first and
/// the identify event carrying the row without its id
#[tokio::test]
async fn writes_track_and_identify_per_row() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let group_id = Uuid::new_v4().to_string();

    let service = SubscriptionGroupService::new(db);
    let count = service
        .upload_csv(
            workspace.id.parse().unwrap(),
            &group_id,
            b"id,email,plan\nuser-1,one@example.com,pro\nuser-2,,free\n",
        )
        .await?;

    assert_eq!(count, 4);

    let payloads = stored_payloads(db).await;
    assert_eq!(payloads.len(), 4);

    assert_eq!(payloads[0]["type"], "track");
    assert_eq!(payloads[0]["userId"], "user-1");
    assert_eq!(payloads[0]["event"], "DFSubscriptionChange");
    assert_eq!(payloads[0]["properties"]["subscriptionId"], group_id.as_str());
    assert_eq!(payloads[0]["properties"]["action"], "Subscribe");

    assert_eq!(payloads[1]["type"], "identify");
    assert_eq!(payloads[1]["userId"], "user-1");
    assert_eq!(
        payloads[1]["traits"],
        serde_json::json!({ "email": "one@example.com", "plan": "pro" })
    );

    assert_eq!(payloads[3]["userId"], "user-2");

    let timestamps: HashSet<&str> = payloads
        .iter()
        .map(|p| p["timestamp"].as_str().unwrap())
        .collect();
    assert_eq!(timestamps.len(), 1);

    Ok(())
}

/// Tests that any invalid row rejects the whole upload.
///
/// Expected: Err(InvalidRows) naming row 1 and no events stored
#[tokio::test]
async fn invalid_row_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let service = SubscriptionGroupService::new(db);
    let result = service
        .upload_csv(
            workspace.id.parse().unwrap(),
            "group-1",
            b"id,email\nuser-1,one@example.com\n,\n",
        )
        .await;

    match result {
        Err(AppError::UploadErr(UploadError::InvalidRows(rows))) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].row, 1);
        }
        other => panic!("expected invalid rows, got {:?}", other),
    }
    assert_eq!(entity::prelude::UserEvent::find().count(db).await?, 0);

    Ok(())
}

/// Tests resolving a row's user by email.
///
/// Expected: Ok with both events attributed to the existing user's id
#[tokio::test]
async fn resolves_existing_user_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    factory::helpers::create_email_assignment(db, &workspace.id, "existing-user", "a@example.com")
        .await?;

    let service = SubscriptionGroupService::new(db);
    service
        .upload_csv(
            workspace.id.parse().unwrap(),
            "group-1",
            b"email\na@example.com\n",
        )
        .await?;

    let payloads = stored_payloads(db).await;
    assert_eq!(payloads.len(), 2);
    assert!(payloads.iter().all(|p| p["userId"] == "existing-user"));

    Ok(())
}

/// Tests that unmatched rows get distinct fresh ids.
///
/// Expected: Ok with two distinct UUID user ids, shared by each row's event pair
#[tokio::test]
async fn generates_distinct_ids_for_unknown_emails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let service = SubscriptionGroupService::new(db);
    service
        .upload_csv(
            workspace.id.parse().unwrap(),
            "group-1",
            b"email\nnew-1@example.com\nnew-2@example.com\n",
        )
        .await?;

    let payloads = stored_payloads(db).await;
    let user_ids: Vec<&str> = payloads
        .iter()
        .map(|p| p["userId"].as_str().unwrap())
        .collect();

    assert_eq!(user_ids[0], user_ids[1]);
    assert_eq!(user_ids[2], user_ids[3]);
    assert_ne!(user_ids[0], user_ids[2]);
    assert!(Uuid::parse_str(user_ids[0]).is_ok());
    assert!(Uuid::parse_str(user_ids[2]).is_ok());

    Ok(())
}

/// Tests that a header-only file is accepted without writing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn header_only_file_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;

    let service = SubscriptionGroupService::new(db);
    let count = service
        .upload_csv(workspace.id.parse().unwrap(), "group-1", b"id,email\n")
        .await?;

    assert_eq!(count, 0);

    Ok(())
}

/// Tests uploading several thousand rows in one file.
///
/// Expected: Ok(10000) with every event stored
#[tokio::test]
async fn accepts_large_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    let mut csv = String::from("id,email\n");
    for i in 0..5_000 {
        csv.push_str(&format!("user-{0},user-{0}@example.com\n", i));
    }

    let service = SubscriptionGroupService::new(db);
    let count = service
        .upload_csv(workspace.id.parse().unwrap(), "group-1", csv.as_bytes())
        .await?;

    assert_eq!(count, 10_000);
    assert_eq!(entity::prelude::UserEvent::find().count(db).await?, 10_000);

    Ok(())
}

/// Tests uploading more email-only rows than one lookup query binds.
///
/// Expected: Ok with the known email resolved and every row written
#[tokio::test]
async fn accepts_large_email_only_upload() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workspace_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let workspace = factory::create_workspace(db).await?;
    factory::helpers::create_email_assignment(
        db,
        &workspace.id,
        "existing-user",
        "u2999@example.com",
    )
    .await?;
    let mut csv = String::from("email\n");
    for i in 0..3_000 {
        csv.push_str(&format!("u{}@example.com\n", i));
    }

    let service = SubscriptionGroupService::new(db);
    let count = service
        .upload_csv(workspace.id.parse().unwrap(), "group-1", csv.as_bytes())
        .await?;

    assert_eq!(count, 6_000);
    let payloads = stored_payloads(db).await;
    assert_eq!(payloads[5_998]["userId"], "existing-user");
    assert_eq!(payloads[5_999]["userId"], "existing-user");

    Ok(())
}
