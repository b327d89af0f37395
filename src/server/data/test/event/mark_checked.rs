use super::*;

/// Tests setting the audit latch.
///
/// Verifies that marking an event checked excludes it from subsequent
/// audit selections and that marking again is a harmless no-op.
///
/// Expected: Ok with checked set and the audit queue empty afterwards
#[tokio::test]
async fn latches_event_out_of_the_audit_queue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 12, 0);
    let event = EventFactory::new(db)
        .date(now)
        .status("completed")
        .build()
        .await?;

    let repo = EventRepository::new(db);
    repo.mark_checked(event.id).await?;

    let event = entity::prelude::Event::find_by_id(event.id).one(db).await?.unwrap();
    assert!(event.checked);
    assert!(repo.get_unaudited_completed().await?.is_empty());

    // A second latch is a no-op
    repo.mark_checked(event.id).await?;
    let event = entity::prelude::Event::find_by_id(event.id).one(db).await?.unwrap();
    assert!(event.checked);

    Ok(())
}
