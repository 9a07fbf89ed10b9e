use super::*;

/// Tests creating a new meditation session.
///
/// Verifies that the session starts in the not-completed state with no end
/// time or after-mood regardless of the input.
///
/// Expected: Ok(MeditationSession) with completed false
#[tokio::test]
async fn creates_session_in_not_completed_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::MeditationSession)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = MeditationSessionRepository::new(db);

    let session = repo
        .create(CreateMeditationSessionParams {
            user_id: user.id,
            title: "Morning calm".to_string(),
            session_type: "guided".to_string(),
            duration_seconds: 600,
            started_at: Utc::now(),
            mood_before: Some(4),
        })
        .await?;

    assert_eq!(session.user_id, user.id);
    assert_eq!(session.title, "Morning calm");
    assert!(!session.completed);
    assert!(session.ended_at.is_none());
    assert_eq!(session.mood_before, Some(4));
    assert!(session.mood_after.is_none());

    Ok(())
}
