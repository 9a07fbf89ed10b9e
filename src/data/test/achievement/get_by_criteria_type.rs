use super::*;
use test_utils::factory::achievement::AchievementFactory;

/// Tests listing achievements by activity type.
///
/// Verifies that only achievements fed by the given criteria type come
/// back.
///
/// Expected: Ok with the matching achievements only
#[tokio::test]
async fn returns_only_matching_criteria_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Achievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AchievementFactory::new(db)
        .criteria_type("meditation_completed")
        .build()
        .await?;
    AchievementFactory::new(db)
        .criteria_type("meditation_completed")
        .build()
        .await?;
    AchievementFactory::new(db)
        .criteria_type("stress_assessment")
        .build()
        .await?;

    let repo = AchievementRepository::new(db);
    let achievements = repo.get_by_criteria_type("meditation_completed").await?;

    assert_eq!(achievements.len(), 2);
    assert!(achievements
        .iter()
        .all(|a| a.criteria_type == "meditation_completed"));

    Ok(())
}
