use super::*;

/// Tests appending a notification.
///
/// Verifies that a fresh notification starts unread, with the toast not
/// yet shown, and carries the stored kind string.
///
/// Expected: Ok with read and toast_shown false and kind "warning"
#[tokio::test]
async fn appends_unread_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 13, 1, 0);
    let notification = NotificationRepository::new(db)
        .create(
            NewNotificationParam {
                email: "alice@example.com".to_string(),
                message: "You missed an event!".to_string(),
                reason: "You have received a warning for not attending the event titled \
                         \"Park Cleanup\". Please remember to attend future events."
                    .to_string(),
                kind: NotificationKind::Warning,
            },
            now,
        )
        .await?;

    assert_eq!(notification.email, "alice@example.com");
    assert_eq!(notification.kind, "warning");
    assert!(!notification.read);
    assert!(!notification.toast_shown);
    assert_eq!(notification.timestamp, now);

    Ok(())
}
