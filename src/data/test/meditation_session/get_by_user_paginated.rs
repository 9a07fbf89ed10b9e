use super::*;

/// Tests paginated session listing order.
///
/// Verifies that sessions come back newest first with the correct total.
///
/// Expected: Ok with sessions ordered by start time descending
#[tokio::test]
async fn returns_newest_first_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    let oldest = factory::create_completed_session(db, user.id, now - Duration::days(2)).await?;
    let middle = factory::create_completed_session(db, user.id, now - Duration::days(1)).await?;
    let newest = factory::create_completed_session(db, user.id, now).await?;

    let repo = MeditationSessionRepository::new(db);
    let (sessions, total) = repo.get_by_user_paginated(user.id, 0, 10, None, None).await?;

    assert_eq!(total, 3);
    assert_eq!(sessions.len(), 3);
    assert_eq!(sessions[0].id, newest.id);
    assert_eq!(sessions[1].id, middle.id);
    assert_eq!(sessions[2].id, oldest.id);

    Ok(())
}

/// Tests bounding the listing by a start-time range.
///
/// Expected: only sessions inside the range are returned
#[tokio::test]
async fn filters_by_time_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    factory::create_completed_session(db, user.id, now - Duration::days(10)).await?;
    let recent = factory::create_completed_session(db, user.id, now - Duration::hours(1)).await?;

    let repo = MeditationSessionRepository::new(db);
    let (sessions, total) = repo
        .get_by_user_paginated(user.id, 0, 10, Some(now - Duration::days(1)), Some(now))
        .await?;

    assert_eq!(total, 1);
    assert_eq!(sessions[0].id, recent.id);

    Ok(())
}

/// Tests that the listing is scoped to one user.
///
/// Expected: other users' sessions are excluded
#[tokio::test]
async fn excludes_other_users_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    factory::create_session(db, user.id).await?;
    factory::create_session(db, other.id).await?;

    let repo = MeditationSessionRepository::new(db);
    let (sessions, total) = repo.get_by_user_paginated(user.id, 0, 10, None, None).await?;

    assert_eq!(total, 1);
    assert_eq!(sessions[0].user_id, user.id);

    Ok(())
}
