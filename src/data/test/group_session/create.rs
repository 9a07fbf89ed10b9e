use super::*;

/// Tests creating a group session.
///
/// Verifies that the session starts in the scheduled state.
///
/// Expected: Ok(GroupSession) with status Scheduled
#[tokio::test]
async fn creates_session_in_scheduled_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;

    let repo = GroupSessionRepository::new(db);
    let session = repo
        .create(CreateGroupSessionParams {
            host_id: host.id,
            title: "Sunday Breathing Circle".to_string(),
            description: Some("Guided breathing for all levels".to_string()),
            scheduled_at: Utc::now() + Duration::days(1),
            duration_minutes: 45,
            max_participants: 12,
        })
        .await?;

    assert_eq!(session.host_id, host.id);
    assert_eq!(session.title, "Sunday Breathing Circle");
    assert_eq!(session.max_participants, 12);
    assert_eq!(session.status, GroupSessionStatus::Scheduled);

    Ok(())
}
