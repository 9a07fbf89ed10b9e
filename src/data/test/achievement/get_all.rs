use super::*;
use test_utils::factory::achievement::AchievementFactory;

/// Tests listing all achievement definitions.
///
/// Verifies that the listing is ordered by name ascending.
///
/// Expected: Ok with achievements in name order
#[tokio::test]
async fn returns_achievements_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Achievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AchievementFactory::new(db).name("Zen Master").build().await?;
    AchievementFactory::new(db).name("Beginner").build().await?;
    AchievementFactory::new(db).name("Mindful Week").build().await?;

    let repo = AchievementRepository::new(db);
    let achievements = repo.get_all().await?;

    assert_eq!(achievements.len(), 3);
    assert_eq!(achievements[0].name, "Beginner");
    assert_eq!(achievements[1].name, "Mindful Week");
    assert_eq!(achievements[2].name, "Zen Master");

    Ok(())
}

/// Tests listing with no achievements defined.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_without_achievements() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Achievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AchievementRepository::new(db);
    let achievements = repo.get_all().await?;

    assert!(achievements.is_empty());

    Ok(())
}
