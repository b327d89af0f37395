use super::*;

/// Tests removing a registration.
///
/// Verifies that the row is deleted and the removal count reported.
///
/// Expected: Ok(1) and the registration gone
#[tokio::test]
async fn removes_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;
    VolunteerFactory::new(db, event.id)
        .email("alice@example.com")
        .build()
        .await?;

    let repo = VolunteerRepository::new(db);
    let removed = repo.remove(event.id, "alice@example.com").await?;

    assert_eq!(removed, 1);
    assert!(repo.find(event.id, "alice@example.com").await?.is_none());

    Ok(())
}

/// Tests removing a registration that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let event = factory::event::create_event(db).await?;

    let removed = VolunteerRepository::new(db)
        .remove(event.id, "ghost@example.com")
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}
