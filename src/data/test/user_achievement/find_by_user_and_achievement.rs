use super::*;

/// Tests finding an existing progress row.
///
/// Expected: Ok(Some(Model)) for the user and achievement pair
#[tokio::test]
async fn finds_existing_progress_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db).await?;
    let created = factory::create_user_achievement(db, user.id, achievement.id).await?;

    let repo = UserAchievementRepository::new(db);
    let found = repo
        .find_by_user_and_achievement(user.id, achievement.id)
        .await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().id, created.id);

    Ok(())
}

/// Tests finding a progress row that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_progress_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_achievement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let achievement = factory::create_achievement(db).await?;

    let repo = UserAchievementRepository::new(db);
    let found = repo
        .find_by_user_and_achievement(user.id, achievement.id)
        .await?;

    assert!(found.is_none());

    Ok(())
}
