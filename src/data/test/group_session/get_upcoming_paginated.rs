use super::*;
use test_utils::factory::group_session::GroupSessionFactory;

/// Tests listing upcoming sessions, soonest first.
///
/// Verifies that only scheduled sessions come back, ordered by scheduled
/// time ascending.
///
/// Expected: Ok with scheduled sessions in soonest-first order
#[tokio::test]
async fn returns_scheduled_sessions_soonest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let now = Utc::now();

    let later = GroupSessionFactory::new(db, host.id)
        .scheduled_at(now + Duration::days(3))
        .build()
        .await?;
    let sooner = GroupSessionFactory::new(db, host.id)
        .scheduled_at(now + Duration::days(1))
        .build()
        .await?;
    GroupSessionFactory::new(db, host.id)
        .scheduled_at(now + Duration::days(2))
        .status("cancelled")
        .build()
        .await?;

    let repo = GroupSessionRepository::new(db);
    let (sessions, total) = repo.get_upcoming_paginated(0, 10).await?;

    assert_eq!(total, 2);
    assert_eq!(sessions[0].session.id, sooner.id);
    assert_eq!(sessions[1].session.id, later.id);

    Ok(())
}

/// Tests that the listing carries participant counts.
///
/// Expected: each session reports its own participant count
#[tokio::test]
async fn includes_participant_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;

    factory::create_participant(db, session.id, host.id).await?;
    factory::create_participant(db, session.id, member.id).await?;

    let repo = GroupSessionRepository::new(db);
    let (sessions, _) = repo.get_upcoming_paginated(0, 10).await?;

    assert_eq!(sessions[0].participant_count, 2);

    Ok(())
}
