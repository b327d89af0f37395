//! Event creation.
//!
//! Organizer-facing event creation; events start `upcoming` with a fresh
//! self-attendance code that the organizer shares with volunteers on site.

use chrono::NaiveDateTime;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{data::event::EventRepository, error::AppError, model::event::CreateEventParam};

/// Characters used for attendance codes (unambiguous uppercase alphanumerics).
const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Length of generated attendance codes.
const CODE_LENGTH: usize = 6;

/// Service providing business logic for event management.
pub struct EventService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event in `upcoming` status.
    ///
    /// A random attendance code is generated and stored with the event for
    /// the volunteer self-attendance flow.
    ///
    /// # Arguments
    /// - `param` - Title, organizer, scheduled start and duration
    /// - `now` - Creation timestamp (local wall-clock time)
    ///
    /// # Returns
    /// - `Ok(Model)` - The created event
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateEventParam,
        now: NaiveDateTime,
    ) -> Result<entity::event::Model, AppError> {
        let code = generate_attendance_code();

        let event = EventRepository::new(self.db)
            .create(param, Some(code), now)
            .await?;

        Ok(event)
    }
}

/// Generates a random 6-character uppercase alphanumeric attendance code.
fn generate_attendance_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}
