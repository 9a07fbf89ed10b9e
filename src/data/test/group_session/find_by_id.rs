use super::*;

/// Tests finding a group session by id.
///
/// Expected: Ok(Some(GroupSession)) for an existing session
#[tokio::test]
async fn finds_existing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let created = factory::create_group_session(db, host.id).await?;

    let repo = GroupSessionRepository::new(db);
    let found = repo.find_by_id(created.id).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests finding a non-existent group session.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupSessionRepository::new(db);
    let found = repo.find_by_id(9999).await?;

    assert!(found.is_none());

    Ok(())
}
