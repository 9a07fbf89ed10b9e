use super::*;

/// Tests recording a login for an existing user.
///
/// Verifies that the login count is incremented and the login time stamped
/// on each call.
///
/// Expected: Ok(User) with login_count incremented and last_login_at set
#[tokio::test]
async fn increments_login_count_and_stamps_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = test_utils::factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let user = repo.record_login(created.id).await?;
    assert_eq!(user.login_count, 1);
    assert!(user.last_login_at.is_some());

    let user = repo.record_login(created.id).await?;
    assert_eq!(user.login_count, 2);

    Ok(())
}

/// Tests recording a login for a non-existent user.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.record_login(9999).await;

    assert!(result.is_err());

    Ok(())
}
