use super::*;

/// Tests deleting a meditation session.
///
/// Expected: Ok(()) and the session is no longer found
#[tokio::test]
async fn deletes_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let created = factory::create_session(db, user.id).await?;

    let repo = MeditationSessionRepository::new(db);
    repo.delete(created.id).await?;

    let found = repo.find_by_id(created.id).await?;
    assert!(found.is_none());

    Ok(())
}
