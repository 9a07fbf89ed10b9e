use super::*;

/// Tests moving a session through its lifecycle.
///
/// Expected: Ok(GroupSession) with the new status stored
#[tokio::test]
async fn sets_new_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let created = factory::create_group_session(db, host.id).await?;

    let repo = GroupSessionRepository::new(db);

    let session = repo
        .update_status(created.id, GroupSessionStatus::InProgress)
        .await?;
    assert_eq!(session.status, GroupSessionStatus::InProgress);

    let session = repo
        .update_status(created.id, GroupSessionStatus::Completed)
        .await?;
    assert_eq!(session.status, GroupSessionStatus::Completed);

    Ok(())
}

/// Tests setting the status of a non-existent session.
///
/// Expected: Err for the missing record
#[tokio::test]
async fn errors_for_nonexistent_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupSessionRepository::new(db);
    let result = repo
        .update_status(9999, GroupSessionStatus::Cancelled)
        .await;

    assert!(result.is_err());

    Ok(())
}
