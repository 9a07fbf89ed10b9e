use super::*;
use test_utils::factory::achievement::AchievementFactory;

/// Tests listing a user's progress joined with definitions.
///
/// Verifies that rows come back with their achievement definitions,
/// ordered by achievement name.
///
/// Expected: Ok with statuses in achievement name order
#[tokio::test]
async fn returns_statuses_ordered_by_achievement_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let zen = AchievementFactory::new(db).name("Zen Master").build().await?;
    let beginner = AchievementFactory::new(db).name("Beginner").build().await?;

    factory::create_user_achievement(db, user.id, zen.id).await?;
    factory::create_user_achievement(db, user.id, beginner.id).await?;

    let repo = UserAchievementRepository::new(db);
    let statuses = repo.get_by_user(user.id).await?;

    assert_eq!(statuses.len(), 2);
    assert_eq!(statuses[0].achievement.name, "Beginner");
    assert_eq!(statuses[1].achievement.name, "Zen Master");

    Ok(())
}

/// Tests that the listing is scoped to one user.
///
/// Expected: other users' progress rows are excluded
#[tokio::test]
async fn excludes_other_users_progress() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db).await?;

    factory::create_user_achievement(db, other.id, achievement.id).await?;

    let repo = UserAchievementRepository::new(db);
    let statuses = repo.get_by_user(user.id).await?;

    assert!(statuses.is_empty());

    Ok(())
}
