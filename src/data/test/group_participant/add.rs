use super::*;

/// Tests adding a user to a group session.
///
/// Expected: Ok(Model) with the join time stamped
#[tokio::test]
async fn adds_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;

    let repo = GroupParticipantRepository::new(db);
    let participant = repo.add(session.id, member.id).await?;

    assert_eq!(participant.group_session_id, session.id);
    assert_eq!(participant.user_id, member.id);

    Ok(())
}
