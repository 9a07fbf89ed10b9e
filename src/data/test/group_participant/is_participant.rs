use super::*;

/// Tests checking membership for an enrolled user.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_enrolled_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;

    factory::create_participant(db, session.id, host.id).await?;

    let repo = GroupParticipantRepository::new(db);
    assert!(repo.is_participant(session.id, host.id).await?);

    Ok(())
}

/// Tests checking membership for a user who never joined.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;

    let repo = GroupParticipantRepository::new(db);
    assert!(!repo.is_participant(session.id, outsider.id).await?);

    Ok(())
}
