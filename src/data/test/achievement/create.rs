use super::*;

/// Tests creating an achievement definition.
///
/// Expected: Ok(Achievement) with all fields stored
#[tokio::test]
async fn creates_achievement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Achievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AchievementRepository::new(db);
    let achievement = repo
        .create(CreateAchievementParams {
            name: "First Steps".to_string(),
            description: "Complete your first meditation session".to_string(),
            category: "count".to_string(),
            criteria_type: "meditation_completed".to_string(),
            criteria_value: 1,
            icon: "footsteps".to_string(),
            points: 10,
        })
        .await?;

    assert_eq!(achievement.name, "First Steps");
    assert_eq!(achievement.criteria_type, "meditation_completed");
    assert_eq!(achievement.criteria_value, 1);
    assert_eq!(achievement.points, 10);

    Ok(())
}
