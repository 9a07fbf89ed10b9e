use super::*;

/// Tests completing an active session.
///
/// Verifies that the session is marked completed with the end time and
/// after-mood stored.
///
/// Expected: Ok(MeditationSession) with completed true
#[tokio::test]
async fn marks_session_completed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_session(db, user.id).await?;
    let ended_at = Utc::now();

    let repo = MeditationSessionRepository::new(db);
    let session = repo.complete(created.id, ended_at, Some(8)).await?;

    assert!(session.completed);
    assert_eq!(session.ended_at.map(|t| t.timestamp()), Some(ended_at.timestamp()));
    assert_eq!(session.mood_after, Some(8));

    Ok(())
}

/// Tests completing a session without an after-mood.
///
/// Expected: Ok(MeditationSession) with mood_after still None
#[tokio::test]
async fn leaves_mood_after_unset_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_session(db, user.id).await?;

    let repo = MeditationSessionRepository::new(db);
    let session = repo.complete(created.id, Utc::now(), None).await?;

    assert!(session.completed);
    assert!(session.mood_after.is_none());

    Ok(())
}

/// Tests completing a non-existent session.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_nonexistent_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeditationSessionRepository::new(db);
    let result = repo.complete(9999, Utc::now(), None).await;

    assert!(result.is_err());

    Ok(())
}
