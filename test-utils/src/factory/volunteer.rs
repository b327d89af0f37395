//! Volunteer factory for creating test event registrations.
//!
//! This module provides factory methods for creating event volunteer entities
//! with sensible defaults. The `is_present` flag is tri-state: `None` means the
//! volunteer was never marked, `Some(false)` marked absent, `Some(true)` present.

use crate::factory::helpers::next_id;
use chrono::{Local, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test volunteer registrations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::volunteer::VolunteerFactory;
///
/// let volunteer = VolunteerFactory::new(&db, event.id)
///     .email("volunteer@example.com")
///     .is_present(Some(true))
///     .build()
///     .await?;
/// ```
pub struct VolunteerFactory<'a> {
    db: &'a DatabaseConnection,
    event_id: i32,
    email: String,
    name: String,
    registered_at: NaiveDateTime,
    is_present: Option<bool>,
}

impl<'a> VolunteerFactory<'a> {
    /// Creates a new VolunteerFactory with default values.
    ///
    /// Defaults:
    /// - email: `"volunteer{id}@example.com"` where id is auto-incremented
    /// - name: `"Volunteer {id}"`
    /// - registered_at: current local time
    /// - is_present: `None` (never marked)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `event_id` - ID of the event this registration belongs to
    ///
    /// # Returns
    /// - `VolunteerFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, event_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            event_id,
            email: format!("volunteer{}@example.com", id),
            name: format!("Volunteer {}", id),
            registered_at: Local::now().naive_local(),
            is_present: None,
        }
    }

    /// Sets the email for the registration.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name for the registration.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the registration timestamp.
    pub fn registered_at(mut self, registered_at: NaiveDateTime) -> Self {
        self.registered_at = registered_at;
        self
    }

    /// Sets the tri-state presence flag.
    pub fn is_present(mut self, is_present: Option<bool>) -> Self {
        self.is_present = is_present;
        self
    }

    /// Builds and inserts the volunteer entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event_volunteer::Model)` - Created volunteer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event_volunteer::Model, DbErr> {
        entity::event_volunteer::ActiveModel {
            event_id: ActiveValue::Set(self.event_id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            registered_at: ActiveValue::Set(self.registered_at),
            is_present: ActiveValue::Set(self.is_present),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a volunteer registration with default values.
///
/// Shorthand for `VolunteerFactory::new(db, event_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `event_id` - ID of the event this registration belongs to
///
/// # Returns
/// - `Ok(entity::event_volunteer::Model)` - Created volunteer entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_volunteer(
    db: &DatabaseConnection,
    event_id: i32,
) -> Result<entity::event_volunteer::Model, DbErr> {
    VolunteerFactory::new(db, event_id).build().await
}
