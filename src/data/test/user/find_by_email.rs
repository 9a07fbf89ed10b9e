use super::*;

/// Tests finding an existing user by email address.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    test_utils::factory::user::create_user_with_email(db, "ben@example.com").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("ben@example.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().email, "ben@example.com");

    Ok(())
}

/// Tests querying for an unknown email address.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
