use super::*;

/// Tests counting a session's participants.
///
/// Verifies that participants of other sessions are not counted.
///
/// Expected: Ok(2) for the session's own participants
#[tokio::test]
async fn counts_only_own_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;
    let other = factory::create_group_session(db, host.id).await?;

    factory::create_participant(db, session.id, host.id).await?;
    factory::create_participant(db, session.id, member.id).await?;
    factory::create_participant(db, other.id, host.id).await?;

    let repo = GroupParticipantRepository::new(db);
    let count = repo.count_by_session(session.id).await?;

    assert_eq!(count, 2);

    Ok(())
}
