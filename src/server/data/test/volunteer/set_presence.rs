use super::*;

/// Tests marking attendance.
///
/// Verifies that the presence flag is updated for the targeted volunteer
/// only.
///
/// Expected: Ok(1) with only the targeted row changed
#[tokio::test]
async fn updates_targeted_volunteer_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;
    let present = VolunteerFactory::new(db, event.id)
        .email("present@example.com")
        .build()
        .await?;
    let absent = VolunteerFactory::new(db, event.id)
        .email("absent@example.com")
        .build()
        .await?;

    let updated = VolunteerRepository::new(db)
        .set_presence(event.id, "present@example.com", true)
        .await?;
    assert_eq!(updated, 1);

    let present = entity::prelude::EventVolunteer::find_by_id(present.id)
        .one(db)
        .await?
        .unwrap();
    let absent = entity::prelude::EventVolunteer::find_by_id(absent.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(present.is_present, Some(true));
    assert!(absent.is_present.is_none());

    Ok(())
}

/// Tests marking attendance for an unregistered email.
///
/// Expected: Ok(0) with nothing changed
#[tokio::test]
async fn returns_zero_when_not_registered() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let updated = VolunteerRepository::new(db)
        .set_presence(event.id, "ghost@example.com", true)
        .await?;

    assert_eq!(updated, 0);

    Ok(())
}
