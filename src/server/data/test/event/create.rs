use super::*;

/// Tests creating a new event.
///
/// Verifies that the event repository creates an upcoming, unchecked event
/// with the provided attendance code and timestamps.
///
/// Expected: Ok with status "upcoming" and the audit latch cleared
#[tokio::test]
async fn creates_upcoming_unchecked_event() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 9, 0);
    let repo = EventRepository::new(db);
    let event = repo
        .create(
            CreateEventParam {
                title: "Park Cleanup".to_string(),
                organizer_email: "organizer@example.com".to_string(),
                date: dt(2026, 7, 20, 10, 0),
                duration: 120,
            },
            Some("XK42QZ".to_string()),
            now,
        )
        .await?;

    assert_eq!(event.title, "Park Cleanup");
    assert_eq!(EventStatus::from_str(&event.status).unwrap(), EventStatus::Upcoming);
    assert!(!event.checked);
    assert_eq!(event.attendance_code.as_deref(), Some("XK42QZ"));
    assert_eq!(event.created_at, now);

    Ok(())
}
