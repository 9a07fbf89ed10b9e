use super::*;

/// Tests upserting progress for a pair with no existing row.
///
/// Expected: Ok(Model) with a new progress row inserted
#[tokio::test]
async fn inserts_new_progress_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db).await?;

    let repo = UserAchievementRepository::new(db);
    let record = repo
        .upsert_progress(user.id, achievement.id, 3, false, None)
        .await?;

    assert_eq!(record.user_id, user.id);
    assert_eq!(record.achievement_id, achievement.id);
    assert_eq!(record.progress, 3);
    assert!(!record.is_completed);
    assert!(record.date_earned.is_none());

    Ok(())
}

/// Tests upserting progress for a pair with an existing row.
///
/// Verifies that the existing row is updated in place rather than a new
/// row inserted.
///
/// Expected: Ok(Model) with the same id and updated progress
#[tokio::test]
async fn updates_existing_progress_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db).await?;

    let repo = UserAchievementRepository::new(db);
    let first = repo
        .upsert_progress(user.id, achievement.id, 2, false, None)
        .await?;
    let second = repo
        .upsert_progress(user.id, achievement.id, 5, true, Some(Utc::now()))
        .await?;

    assert_eq!(second.id, first.id);
    assert_eq!(second.progress, 5);
    assert!(second.is_completed);
    assert!(second.date_earned.is_some());

    Ok(())
}

/// Tests that an earned timestamp is never overwritten.
///
/// Verifies that once a row carries a date_earned, later upserts leave
/// it untouched.
///
/// Expected: Ok(Model) with the original earned time preserved
#[tokio::test]
async fn preserves_date_earned_on_later_upserts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db).await?;
    let earned_at = Utc::now() - Duration::days(3);

    let repo = UserAchievementRepository::new(db);
    repo.upsert_progress(user.id, achievement.id, 5, true, Some(earned_at))
        .await?;
    let record = repo
        .upsert_progress(user.id, achievement.id, 8, true, Some(Utc::now()))
        .await?;

    assert_eq!(
        record.date_earned.map(|t| t.timestamp()),
        Some(earned_at.timestamp())
    );

    Ok(())
}
