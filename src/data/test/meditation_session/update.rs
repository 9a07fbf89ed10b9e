use super::*;

/// Tests updating a subset of session fields.
///
/// Verifies that provided fields are written while omitted fields keep
/// their existing values.
///
/// Expected: Ok(MeditationSession) with only the title changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
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
    let session = repo
        .update(UpdateMeditationSessionParams {
            id: created.id,
            title: Some("Evening wind-down".to_string()),
            session_type: None,
            duration_seconds: None,
            mood_before: None,
        })
        .await?;

    assert_eq!(session.title, "Evening wind-down");
    assert_eq!(session.session_type, created.session_type);
    assert_eq!(session.duration_seconds, created.duration_seconds);

    Ok(())
}

/// Tests updating every editable field at once.
///
/// Expected: Ok(MeditationSession) with all fields changed
#[tokio::test]
async fn updates_all_fields() -> Result<(), DbErr> {
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
    let session = repo
        .update(UpdateMeditationSessionParams {
            id: created.id,
            title: Some("Body scan".to_string()),
            session_type: Some("unguided".to_string()),
            duration_seconds: Some(1200),
            mood_before: Some(7),
        })
        .await?;

    assert_eq!(session.title, "Body scan");
    assert_eq!(session.session_type, "unguided");
    assert_eq!(session.duration_seconds, 1200);
    assert_eq!(session.mood_before, Some(7));

    Ok(())
}

/// Tests updating a non-existent session.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn errors_for_nonexistent_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MeditationSessionRepository::new(db);
    let result = repo
        .update(UpdateMeditationSessionParams {
            id: 9999,
            title: Some("Missing".to_string()),
            session_type: None,
            duration_seconds: None,
            mood_before: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
