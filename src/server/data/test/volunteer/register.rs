use super::*;

/// Tests registering a volunteer.
///
/// Verifies that a fresh registration is linked to the event and starts
/// marked absent (`is_present = false`), not unmarked.
///
/// Expected: Ok with is_present Some(false)
#[tokio::test]
async fn registers_with_absent_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let volunteer = VolunteerRepository::new(db)
        .register(event.id, "alice@example.com", "Alice", dt(2026, 7, 12, 9, 30))
        .await?;

    assert_eq!(volunteer.event_id, event.id);
    assert_eq!(volunteer.email, "alice@example.com");
    assert_eq!(volunteer.is_present, Some(false));
    assert_eq!(volunteer.registered_at, dt(2026, 7, 12, 9, 30));

    Ok(())
}

/// Tests looking up a registration.
///
/// Verifies that `find` matches on both event and email, and misses for an
/// email registered on a different event.
///
/// Expected: Ok(Some) for the right pair, Ok(None) otherwise
#[tokio::test]
async fn finds_registration_by_event_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;
    let other = factory::event::create_event(db).await?;
    let repo = VolunteerRepository::new(db);

    repo.register(event.id, "alice@example.com", "Alice", dt(2026, 7, 12, 9, 30))
        .await?;

    assert!(repo.find(event.id, "alice@example.com").await?.is_some());
    assert!(repo.find(other.id, "alice@example.com").await?.is_none());
    assert!(repo.find(event.id, "bob@example.com").await?.is_none());

    Ok(())
}
