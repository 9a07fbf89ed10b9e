use super::*;

/// Tests updating a subset of achievement fields.
///
/// Verifies that provided fields are written while omitted fields keep
/// their existing values.
///
/// Expected: Ok(Achievement) with only the points changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Achievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_achievement(db).await?;

    let repo = AchievementRepository::new(db);
    let achievement = repo
        .update(UpdateAchievementParams {
            id: created.id,
            name: None,
            description: None,
            category: None,
            criteria_type: None,
            criteria_value: None,
            icon: None,
            points: Some(50),
        })
        .await?;

    assert_eq!(achievement.points, 50);
    assert_eq!(achievement.name, created.name);
    assert_eq!(achievement.criteria_value, created.criteria_value);

    Ok(())
}

/// Tests updating a non-existent achievement.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_nonexistent_achievement() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Achievement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AchievementRepository::new(db);
    let result = repo
        .update(UpdateAchievementParams {
            id: 9999,
            name: Some("Missing".to_string()),
            description: None,
            category: None,
            criteria_type: None,
            criteria_value: None,
            icon: None,
            points: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
