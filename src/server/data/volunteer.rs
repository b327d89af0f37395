//! Volunteer registration data repository.
//!
//! Manages the `event_volunteer` rows linking users to events. The
//! `is_present` flag is tri-state (`NULL` never marked, `false` absent,
//! `true` present); registration writes `false` explicitly.

use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct VolunteerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VolunteerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a volunteer for an event.
    ///
    /// The new row starts with `is_present = false` (marked absent until
    /// attendance is taken). Duplicate registrations are rejected by the
    /// unique (event_id, email) index.
    ///
    /// # Arguments
    /// - `event_id` - ID of the event
    /// - `email` - Email of the registering user
    /// - `name` - Display name of the registering user
    /// - `now` - Registration timestamp (local wall-clock time)
    ///
    /// # Returns
    /// - `Ok(Model)` - The created registration
    /// - `Err(DbErr)` - Database error, including unique-constraint violation
    pub async fn register(
        &self,
        event_id: i32,
        email: &str,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<entity::event_volunteer::Model, DbErr> {
        entity::event_volunteer::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(name.to_string()),
            registered_at: ActiveValue::Set(now),
            is_present: ActiveValue::Set(Some(false)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a registration by event and volunteer email.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Registration found
    /// - `Ok(None)` - Volunteer not registered for this event
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(
        &self,
        event_id: i32,
        email: &str,
    ) -> Result<Option<entity::event_volunteer::Model>, DbErr> {
        entity::prelude::EventVolunteer::find()
            .filter(entity::event_volunteer::Column::EventId.eq(event_id))
            .filter(entity::event_volunteer::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Gets all registrations for an event, ordered by registration time.
    ///
    /// # Arguments
    /// - `event_id` - ID of the event
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Registrations in registration order (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_event(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::event_volunteer::Model>, DbErr> {
        entity::prelude::EventVolunteer::find()
            .filter(entity::event_volunteer::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_volunteer::Column::RegisteredAt)
            .all(self.db)
            .await
    }

    /// Sets the presence flag for a registered volunteer.
    ///
    /// # Arguments
    /// - `event_id` - ID of the event
    /// - `email` - Email of the registered volunteer
    /// - `is_present` - Whether the volunteer attended
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated (0 if not registered)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_presence(
        &self,
        event_id: i32,
        email: &str,
        is_present: bool,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::EventVolunteer::update_many()
            .filter(entity::event_volunteer::Column::EventId.eq(event_id))
            .filter(entity::event_volunteer::Column::Email.eq(email))
            .col_expr(
                entity::event_volunteer::Column::IsPresent,
                Expr::value(Some(is_present)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Removes a volunteer's registration from an event.
    ///
    /// # Arguments
    /// - `event_id` - ID of the event
    /// - `email` - Email of the registered volunteer
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 if not registered)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove(&self, event_id: i32, email: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::EventVolunteer::delete_many()
            .filter(entity::event_volunteer::Column::EventId.eq(event_id))
            .filter(entity::event_volunteer::Column::Email.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
