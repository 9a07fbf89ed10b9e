use super::*;

/// Tests listing completed session start times.
///
/// Verifies that start times come back newest first and active sessions
/// are skipped.
///
/// Expected: Ok with two start times in descending order
#[tokio::test]
async fn returns_start_times_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let older = factory::create_completed_session(db, user.id, now - Duration::days(1)).await?;
    let newer = factory::create_completed_session(db, user.id, now).await?;
    factory::create_session(db, user.id).await?;

    let repo = MeditationSessionRepository::new(db);
    let starts = repo.completed_started_at_by_user(user.id).await?;

    assert_eq!(starts.len(), 2);
    assert_eq!(starts[0].timestamp(), newer.started_at.timestamp());
    assert_eq!(starts[1].timestamp(), older.started_at.timestamp());

    Ok(())
}

/// Tests listing start times for a user with no completed sessions.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_completed_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = MeditationSessionRepository::new(db);
    let starts = repo.completed_started_at_by_user(user.id).await?;

    assert!(starts.is_empty());

    Ok(())
}
