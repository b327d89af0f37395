//! Event factory for creating test event entities.
//!
//! This module provides factory methods for creating event entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{Local, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// Provides a builder pattern for creating event entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db)
///     .status("completed")
///     .duration(90)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    organizer_email: String,
    date: NaiveDateTime,
    duration: i32,
    status: String,
    checked: bool,
    attendance_code: Option<String>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - organizer_email: `"organizer{id}@example.com"`
    /// - date: current local time
    /// - duration: `60` minutes
    /// - status: `"upcoming"`
    /// - checked: `false`
    /// - attendance_code: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `EventFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            organizer_email: format!("organizer{}@example.com", id),
            date: Local::now().naive_local(),
            duration: 60,
            status: "upcoming".to_string(),
            checked: false,
            attendance_code: None,
        }
    }

    /// Sets the title of the event.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the organizer email for the event.
    pub fn organizer_email(mut self, email: impl Into<String>) -> Self {
        self.organizer_email = email.into();
        self
    }

    /// Sets the scheduled start of the event (local wall-clock time).
    pub fn date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    /// Sets the duration of the event in minutes.
    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the lifecycle status of the event (`upcoming`, `ongoing`,
    /// `completed` or `cancelled`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the audit latch of the event.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Sets the self-attendance code of the event.
    pub fn attendance_code(mut self, code: impl Into<String>) -> Self {
        self.attendance_code = Some(code.into());
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(self.title),
            organizer_email: ActiveValue::Set(self.organizer_email),
            date: ActiveValue::Set(self.date),
            duration: ActiveValue::Set(self.duration),
            status: ActiveValue::Set(self.status),
            checked: ActiveValue::Set(self.checked),
            attendance_code: ActiveValue::Set(self.attendance_code),
            created_at: ActiveValue::Set(Local::now().naive_local()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
///
/// Shorthand for `EventFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::event::Model)` - Created event entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
