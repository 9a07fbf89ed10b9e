use super::*;
use test_utils::factory::chat_message::create_message_with_content;

/// Tests paginated message listing order.
///
/// Verifies that messages come back oldest first with the correct total.
///
/// Expected: Ok with messages in posting order
#[tokio::test]
async fn returns_messages_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;

    create_message_with_content(db, session.id, host.id, "first").await?;
    create_message_with_content(db, session.id, host.id, "second").await?;
    create_message_with_content(db, session.id, host.id, "third").await?;

    let repo = ChatMessageRepository::new(db);
    let (messages, total) = repo.get_by_session_paginated(session.id, 0, 10).await?;

    assert_eq!(total, 3);
    assert_eq!(messages[0].content, "first");
    assert_eq!(messages[1].content, "second");
    assert_eq!(messages[2].content, "third");

    Ok(())
}

/// Tests that the listing is scoped to one session.
///
/// Expected: other sessions' messages are excluded
#[tokio::test]
async fn excludes_other_sessions_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_group_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let host = factory::create_user(db).await?;
    let session = factory::create_group_session(db, host.id).await?;
    let other = factory::create_group_session(db, host.id).await?;

    factory::create_message(db, session.id, host.id).await?;
    factory::create_message(db, other.id, host.id).await?;

    let repo = ChatMessageRepository::new(db);
    let (messages, total) = repo.get_by_session_paginated(session.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert_eq!(messages[0].group_session_id, session.id);

    Ok(())
}
