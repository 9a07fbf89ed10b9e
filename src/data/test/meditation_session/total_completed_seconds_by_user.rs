use super::*;
use test_utils::factory::meditation_session::MeditationSessionFactory;

/// Tests summing completed session durations.
///
/// Verifies that only completed sessions contribute to the total.
///
/// Expected: Ok(900) for completed sessions of 600 and 300 seconds
#[tokio::test]
async fn sums_completed_durations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let now = Utc::now();

    MeditationSessionFactory::new(db, user.id)
        .duration_seconds(600)
        .started_at(now - Duration::days(1))
        .completed(true)
        .build()
        .await?;
    MeditationSessionFactory::new(db, user.id)
        .duration_seconds(300)
        .started_at(now)
        .completed(true)
        .build()
        .await?;
    MeditationSessionFactory::new(db, user.id)
        .duration_seconds(1200)
        .build()
        .await?;

    let repo = MeditationSessionRepository::new(db);
    let total = repo.total_completed_seconds_by_user(user.id).await?;

    assert_eq!(total, 900);

    Ok(())
}

/// Tests summing for a user with no completed sessions.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_completed_sessions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::create_session(db, user.id).await?;

    let repo = MeditationSessionRepository::new(db);
    let total = repo.total_completed_seconds_by_user(user.id).await?;

    assert_eq!(total, 0);

    Ok(())
}
