//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event together with one registered volunteer.
///
/// Both entities are created with default values; the volunteer is linked
/// to the event and left unmarked (`is_present` = NULL). Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((event, volunteer))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_event_with_volunteer(
    db: &DatabaseConnection,
) -> Result<(entity::event::Model, entity::event_volunteer::Model), DbErr> {
    let event = crate::factory::event::create_event(db).await?;
    let volunteer = crate::factory::volunteer::create_volunteer(db, event.id).await?;

    Ok((event, volunteer))
}
