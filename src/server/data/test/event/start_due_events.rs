use super::*;

/// Tests the bulk upcoming-to-ongoing transition.
///
/// Verifies that events whose start has passed become ongoing while future
/// events stay upcoming.
///
/// Expected: Ok with one row affected and only the due event transitioned
#[tokio::test]
async fn starts_events_whose_date_has_passed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 12, 0);
    let due = EventFactory::new(db).date(now - Duration::hours(1)).build().await?;
    let future = EventFactory::new(db).date(now + Duration::hours(1)).build().await?;

    let started = EventRepository::new(db).start_due_events(now).await?;
    assert_eq!(started, 1);

    let due = entity::prelude::Event::find_by_id(due.id).one(db).await?.unwrap();
    let future = entity::prelude::Event::find_by_id(future.id).one(db).await?.unwrap();
    assert_eq!(due.status, "ongoing");
    assert_eq!(future.status, "upcoming");

    Ok(())
}

/// Tests that a start time exactly at "now" counts as due.
///
/// Expected: Ok with the event transitioned to ongoing
#[tokio::test]
async fn starts_event_exactly_at_now() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 12, 0);
    let event = EventFactory::new(db).date(now).build().await?;

    let started = EventRepository::new(db).start_due_events(now).await?;
    assert_eq!(started, 1);

    let event = entity::prelude::Event::find_by_id(event.id).one(db).await?.unwrap();
    assert_eq!(event.status, "ongoing");

    Ok(())
}

/// Tests that the bulk transition only touches upcoming events.
///
/// Verifies that ongoing, completed and cancelled events with past dates
/// are excluded by the status filter.
///
/// Expected: Ok with zero rows affected and statuses unchanged
#[tokio::test]
async fn excludes_non_upcoming_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 12, 0);
    let past = now - Duration::hours(2);
    for status in ["ongoing", "completed", "cancelled"] {
        EventFactory::new(db).date(past).status(status).build().await?;
    }

    let started = EventRepository::new(db).start_due_events(now).await?;
    assert_eq!(started, 0);

    Ok(())
}

/// Tests idempotency of the bulk transition.
///
/// Verifies that running the transition twice in succession produces the
/// same state, with the second run affecting zero rows.
///
/// Expected: Ok with the second run a no-op
#[tokio::test]
async fn running_twice_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 12, 0);
    let event = EventFactory::new(db).date(now - Duration::hours(1)).build().await?;

    let repo = EventRepository::new(db);
    assert_eq!(repo.start_due_events(now).await?, 1);
    assert_eq!(repo.start_due_events(now).await?, 0);

    let event = entity::prelude::Event::find_by_id(event.id).one(db).await?.unwrap();
    assert_eq!(event.status, "ongoing");

    Ok(())
}
