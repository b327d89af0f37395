use super::*;

/// Tests the per-event completion transition.
///
/// Verifies that completing an event only changes that event's status.
///
/// Expected: Ok with the targeted event completed and the other untouched
#[tokio::test]
async fn completes_targeted_event_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 12, 0);
    let first = EventFactory::new(db).date(now).status("ongoing").build().await?;
    let second = EventFactory::new(db).date(now).status("ongoing").build().await?;

    EventRepository::new(db).complete(first.id).await?;

    let first = entity::prelude::Event::find_by_id(first.id).one(db).await?.unwrap();
    let second = entity::prelude::Event::find_by_id(second.id).one(db).await?.unwrap();
    assert_eq!(first.status, "completed");
    assert_eq!(second.status, "ongoing");

    Ok(())
}
