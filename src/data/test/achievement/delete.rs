use super::*;
use crate::data::user_achievement::UserAchievementRepository;

/// Tests deleting an achievement definition.
///
/// Verifies that progress rows referencing the achievement are purged
/// along with it.
///
/// Expected: Ok(()) with the definition and progress rows gone
#[tokio::test]
async fn deletes_achievement_and_progress_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db).await?;
    factory::create_user_achievement(db, user.id, achievement.id).await?;

    let repo = AchievementRepository::new(db);
    repo.delete(achievement.id).await?;

    let found = repo.find_by_id(achievement.id).await?;
    assert!(found.is_none());

    let progress = UserAchievementRepository::new(db)
        .find_by_user_and_achievement(user.id, achievement.id)
        .await?;
    assert!(progress.is_none());

    Ok(())
}
