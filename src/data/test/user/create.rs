use super::*;

/// Tests creating a new user account.
///
/// Verifies that the repository inserts the user with a zero login count,
/// no recorded login time, and the provided profile fields.
///
/// Expected: Ok(User) with login_count 0 and last_login_at None
#[tokio::test]
async fn creates_user_with_zero_login_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create(RegisterUserParams {
            email: "anna@example.com".to_string(),
            display_name: "Anna".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        })
        .await?;

    assert_eq!(user.email, "anna@example.com");
    assert_eq!(user.display_name, "Anna");
    assert_eq!(user.login_count, 0);
    assert!(user.last_login_at.is_none());

    Ok(())
}

/// Tests that duplicate email addresses are rejected by the unique index.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(RegisterUserParams {
        email: "anna@example.com".to_string(),
        display_name: "Anna".to_string(),
        password_hash: "$argon2id$hash".to_string(),
    })
    .await?;

    let result = repo
        .create(RegisterUserParams {
            email: "anna@example.com".to_string(),
            display_name: "Other Anna".to_string(),
            password_hash: "$argon2id$hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
