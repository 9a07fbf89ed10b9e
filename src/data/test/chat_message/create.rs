use super::*;

/// Tests posting a chat message.
///
/// Verifies that the message is stored with a sent time stamped by the
/// repository.
///
/// Expected: Ok(ChatMessage) with the content preserved
#[tokio::test]
async fn creates_message_with_sent_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;

    let repo = ChatMessageRepository::new(db);
    let message = repo
        .create(CreateChatMessageParams {
            group_session_id: session.id,
            user_id: host.id,
            content: "Welcome everyone".to_string(),
        })
        .await?;

    assert_eq!(message.group_session_id, session.id);
    assert_eq!(message.user_id, host.id);
    assert_eq!(message.content, "Welcome everyone");

    Ok(())
}
