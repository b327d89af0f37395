use super::*;

/// Tests listing an event's registrations.
///
/// Verifies that volunteers come back in registration order and that other
/// events' registrations are excluded.
///
/// Expected: Ok with the two volunteers of the event, earliest first
#[tokio::test]
async fn returns_volunteers_in_registration_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;
    let other = factory::event::create_event(db).await?;

    let late = VolunteerFactory::new(db, event.id)
        .registered_at(dt(2026, 7, 12, 11, 0))
        .build()
        .await?;
    let early = VolunteerFactory::new(db, event.id)
        .registered_at(dt(2026, 7, 12, 9, 0))
        .build()
        .await?;
    VolunteerFactory::new(db, other.id).build().await?;

    let volunteers = VolunteerRepository::new(db).get_by_event(event.id).await?;

    assert_eq!(volunteers.len(), 2);
    assert_eq!(volunteers[0].id, early.id);
    assert_eq!(volunteers[1].id, late.id);

    Ok(())
}
