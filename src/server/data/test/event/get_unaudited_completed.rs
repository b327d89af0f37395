use super::*;

/// Tests the attendance-audit selection query.
///
/// Verifies that only completed events with a cleared audit latch are
/// returned: checked events, events still in progress and cancelled events
/// are all excluded.
///
/// Expected: Ok with exactly the one completed, unchecked event
#[tokio::test]
async fn returns_only_completed_unchecked_events() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Event)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = dt(2026, 7, 12, 12, 0);
    let unaudited = EventFactory::new(db)
        .date(now)
        .status("completed")
        .build()
        .await?;
    EventFactory::new(db)
        .date(now)
        .status("completed")
        .checked(true)
        .build()
        .await?;
    EventFactory::new(db).date(now).status("ongoing").build().await?;
    EventFactory::new(db).date(now).status("cancelled").build().await?;

    let queue = EventRepository::new(db).get_unaudited_completed().await?;

    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, unaudited.id);

    Ok(())
}
