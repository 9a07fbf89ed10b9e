use super::*;

/// Tests counting a user's completed sessions.
///
/// Verifies that active sessions and other users' sessions are not
/// counted.
///
/// Expected: Ok(2) for two completed sessions
#[tokio::test]
async fn counts_only_completed_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let now = Utc::now();

    factory::create_completed_session(db, user.id, now - Duration::days(1)).await?;
    factory::create_completed_session(db, user.id, now).await?;
    factory::create_session(db, user.id).await?;
    factory::create_completed_session(db, other.id, now).await?;

    let repo = MeditationSessionRepository::new(db);
    let count = repo.count_completed_by_user(user.id).await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests counting for a user with no sessions.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = MeditationSessionRepository::new(db);
    let count = repo.count_completed_by_user(user.id).await?;

    assert_eq!(count, 0);

    Ok(())
}
