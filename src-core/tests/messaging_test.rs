mod common;

use chrono::{Duration, Utc};
use fundlink_core::messaging::{
    ChatRepositoryTrait, MessagingError, MessagingServiceTrait, NewMessage,
};
use futures::future::join_all;

fn text_message(sender: &str, body: &str) -> NewMessage {
    NewMessage {
        sender: sender.to_string(),
        body: Some(body.to_string()),
        attachment: None,
        event_id: None,
    }
}

#[tokio::test]
async fn direct_resolution_is_idempotent_across_argument_orders() {
    let env = common::test_env();

    let first = env
        .messaging
        .resolve_or_create_direct("bob", "carol")
        .await
        .unwrap();
    let second = env
        .messaging
        .resolve_or_create_direct("carol", "bob")
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    // No message until a send call
    assert!(second.messages.is_empty());

    let stored = env.chat_repo.load().unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn equal_or_empty_participants_are_rejected() {
    let env = common::test_env();

    assert!(matches!(
        env.messaging
            .resolve_or_create_direct("bob", "bob")
            .await
            .unwrap_err(),
        MessagingError::InvalidParticipants(_)
    ));
    assert!(matches!(
        env.messaging
            .resolve_or_create_direct("bob", "  ")
            .await
            .unwrap_err(),
        MessagingError::InvalidParticipants(_)
    ));
}

#[tokio::test]
async fn racing_resolvers_never_duplicate_a_direct_thread() {
    let env = common::test_env();

    let resolvers = (0..8).map(|i| {
        let messaging = env.messaging.clone();
        tokio::spawn(async move {
            // Half the callers name the pair in reverse order
            if i % 2 == 0 {
                messaging.resolve_or_create_direct("bob", "carol").await
            } else {
                messaging.resolve_or_create_direct("carol", "bob").await
            }
        })
    });

    let threads: Vec<_> = join_all(resolvers)
        .await
        .into_iter()
        .map(|joined| joined.unwrap().unwrap())
        .collect();

    let first_id = &threads[0].id;
    assert!(threads.iter().all(|t| &t.id == first_id));
    assert_eq!(env.chat_repo.load().unwrap().len(), 1);
}

#[tokio::test]
async fn group_creation_never_dedups_but_participants_do() {
    let env = common::test_env();
    let members = vec![
        "bob".to_string(),
        "carol".to_string(),
        "bob".to_string(),
        "dave".to_string(),
    ];

    let first = env
        .messaging
        .create_group("team", members.clone(), "bob")
        .await
        .unwrap();
    let second = env
        .messaging
        .create_group("team", members, "bob")
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.participants, vec!["bob", "carol", "dave"]);
    assert_eq!(second.participants, vec!["bob", "carol", "dave"]);
    assert_eq!(first.group_name.as_deref(), Some("team"));
}

#[tokio::test]
async fn undersized_or_unnamed_groups_are_rejected() {
    let env = common::test_env();

    assert!(matches!(
        env.messaging
            .create_group("", vec!["bob".into(), "carol".into()], "bob")
            .await
            .unwrap_err(),
        MessagingError::InvalidInput(_)
    ));
    assert!(matches!(
        env.messaging
            .create_group("team", vec!["bob".into(), "bob".into()], "bob")
            .await
            .unwrap_err(),
        MessagingError::InvalidParticipants(_)
    ));
}

#[tokio::test]
async fn appended_timestamps_never_regress() {
    let env = common::test_env();
    let thread = env
        .messaging
        .resolve_or_create_direct("bob", "carol")
        .await
        .unwrap();

    env.messaging
        .append_message(&thread.id, text_message("bob", "first"))
        .await
        .unwrap();

    // Push the stored timestamp into the future to force a collision
    let mut threads = env.chat_repo.load().unwrap();
    let future = Utc::now() + Duration::hours(1);
    threads[0].messages[0].timestamp = future;
    env.chat_repo.save(&threads).unwrap();

    let second = env
        .messaging
        .append_message(&thread.id, text_message("carol", "second"))
        .await
        .unwrap();
    assert_eq!(second.timestamp, future + Duration::microseconds(1));

    let stored = env.chat_repo.load().unwrap();
    let timestamps: Vec<_> = stored[0].messages.iter().map(|m| m.timestamp).collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
}

#[tokio::test]
async fn message_carries_exactly_one_payload_kind() {
    let env = common::test_env();
    let thread = env
        .messaging
        .resolve_or_create_direct("bob", "carol")
        .await
        .unwrap();

    let both = NewMessage {
        sender: "bob".to_string(),
        body: Some("hi".to_string()),
        attachment: Some("/uploads/pic.png".to_string()),
        event_id: None,
    };
    assert!(matches!(
        env.messaging.append_message(&thread.id, both).await.unwrap_err(),
        MessagingError::InvalidInput(_)
    ));

    let neither = NewMessage {
        sender: "bob".to_string(),
        body: None,
        attachment: None,
        event_id: None,
    };
    assert!(matches!(
        env.messaging
            .append_message(&thread.id, neither)
            .await
            .unwrap_err(),
        MessagingError::InvalidInput(_)
    ));

    let attachment_only = NewMessage {
        sender: "bob".to_string(),
        body: None,
        attachment: Some("/uploads/pic.png".to_string()),
        event_id: None,
    };
    let stored = env
        .messaging
        .append_message(&thread.id, attachment_only)
        .await
        .unwrap();
    assert!(stored.body.is_none());
    assert_eq!(stored.attachment.as_deref(), Some("/uploads/pic.png"));
}

#[tokio::test]
async fn unknown_thread_fails_not_found() {
    let env = common::test_env();

    assert!(matches!(
        env.messaging
            .append_message("missing", text_message("bob", "hi"))
            .await
            .unwrap_err(),
        MessagingError::ThreadNotFound(_)
    ));
}

#[tokio::test]
async fn listing_returns_direct_and_group_threads_in_store_order() {
    let env = common::test_env();

    let direct = env
        .messaging
        .resolve_or_create_direct("bob", "carol")
        .await
        .unwrap();
    let group = env
        .messaging
        .create_group("team", vec!["carol".into(), "dave".into()], "carol")
        .await
        .unwrap();

    let carols = env.messaging.list_threads_for("carol").unwrap();
    assert_eq!(carols.len(), 2);
    assert_eq!(carols[0].id, direct.id);
    assert_eq!(carols[1].id, group.id);

    let bobs = env.messaging.list_threads_for("bob").unwrap();
    assert_eq!(bobs.len(), 1);
    assert!(env.messaging.list_threads_for("erin").unwrap().is_empty());
}
