use super::*;

/// Tests listing sessions in a time range, oldest first.
///
/// Verifies that only sessions starting inside the range come back and
/// that they are ordered by start time ascending.
///
/// Expected: Ok with two in-range sessions, oldest first
#[tokio::test]
async fn returns_in_range_sessions_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    factory::create_completed_session(db, user.id, now - Duration::days(30)).await?;
    let older = factory::create_completed_session(db, user.id, now - Duration::days(5)).await?;
    let newer = factory::create_completed_session(db, user.id, now - Duration::days(1)).await?;

    let repo = MeditationSessionRepository::new(db);
    let sessions = repo
        .get_by_user_in_range(user.id, Some(now - Duration::days(7)), Some(now))
        .await?;

    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].id, older.id);
    assert_eq!(sessions[1].id, newer.id);

    Ok(())
}

/// Tests listing without range bounds.
///
/// Expected: every session for the user is returned
#[tokio::test]
async fn returns_all_sessions_without_bounds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    factory::create_completed_session(db, user.id, now - Duration::days(30)).await?;
    factory::create_completed_session(db, user.id, now).await?;

    let repo = MeditationSessionRepository::new(db);
    let sessions = repo.get_by_user_in_range(user.id, None, None).await?;

    assert_eq!(sessions.len(), 2);

    Ok(())
}
