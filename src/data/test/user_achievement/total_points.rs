use super::*;
use test_utils::factory::{
    achievement::AchievementFactory, user_achievement::UserAchievementFactory,
};

/// Tests summing points for completed achievements.
///
/// Verifies that in-progress achievements contribute nothing.
///
/// Expected: Ok(25) for completed achievements worth 10 and 15
#[tokio::test]
async fn sums_points_of_completed_achievements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = AchievementFactory::new(db).points(10).build().await?;
    let second = AchievementFactory::new(db).points(15).build().await?;
    let third = AchievementFactory::new(db).points(100).build().await?;

    UserAchievementFactory::new(db, user.id, first.id)
        .completed(true)
        .build()
        .await?;
    UserAchievementFactory::new(db, user.id, second.id)
        .completed(true)
        .build()
        .await?;
    UserAchievementFactory::new(db, user.id, third.id)
        .progress(2)
        .build()
        .await?;

    let repo = UserAchievementRepository::new(db);
    let points = repo.total_points(user.id).await?;

    assert_eq!(points, 25);

    Ok(())
}

/// Tests summing points for a user with no completed achievements.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_without_completed_achievements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserAchievementRepository::new(db);
    let points = repo.total_points(user.id).await?;

    assert_eq!(points, 0);

    Ok(())
}
