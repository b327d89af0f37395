//! Event data repository for database operations.
//!
//! This module provides the `EventRepository` for managing event records in the
//! database: creation, lifecycle status transitions and the attendance-audit
//! selection queries. Lifecycle writes are targeted field-level updates scoped
//! by key so concurrent schedules cannot clobber unrelated fields.

use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::event::{CreateEventParam, EventStatus};

/// Repository providing database operations for event management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating events and driving them through their lifecycle states.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new event in `upcoming` status with the audit latch cleared.
    ///
    /// # Arguments
    /// - `param` - Create parameters (title, organizer, start, duration)
    /// - `attendance_code` - Optional code for volunteer self-attendance
    /// - `now` - Creation timestamp (local wall-clock time)
    ///
    /// # Returns
    /// - `Ok(Model)` - The created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateEventParam,
        attendance_code: Option<String>,
        now: NaiveDateTime,
    ) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            title: ActiveValue::Set(param.title),
            organizer_email: ActiveValue::Set(param.organizer_email),
            date: ActiveValue::Set(param.date),
            duration: ActiveValue::Set(param.duration),
            status: ActiveValue::Set(EventStatus::Upcoming.as_str().to_string()),
            checked: ActiveValue::Set(false),
            attendance_code: ActiveValue::Set(attendance_code),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an event by its ID.
    ///
    /// # Arguments
    /// - `id` - Event ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Event found
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(id).one(self.db).await
    }

    /// Transitions every due upcoming event to `ongoing` in one bulk update.
    ///
    /// Matches events with `status = upcoming` and `date <= now`. Set-based
    /// and idempotent: already-ongoing events are excluded by the filter, so
    /// re-running against the same clock affects zero rows.
    ///
    /// # Arguments
    /// - `now` - Current local wall-clock instant
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of events transitioned
    /// - `Err(DbErr)` - Database error during update
    pub async fn start_due_events(&self, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::Event::update_many()
            .filter(entity::event::Column::Status.eq(EventStatus::Upcoming.as_str()))
            .filter(entity::event::Column::Date.lte(now))
            .col_expr(
                entity::event::Column::Status,
                Expr::value(EventStatus::Ongoing.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets all events with the given lifecycle status.
    ///
    /// # Arguments
    /// - `status` - Lifecycle status to filter by
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching events (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_status(
        &self,
        status: EventStatus,
    ) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(status.as_str()))
            .all(self.db)
            .await
    }

    /// Gets the attendance-audit queue: completed events not yet checked.
    ///
    /// Order among the selected events is unspecified; they are processed
    /// independently.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Completed, unaudited events
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_unaudited_completed(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .filter(entity::event::Column::Status.eq(EventStatus::Completed.as_str()))
            .filter(entity::event::Column::Checked.eq(false))
            .all(self.db)
            .await
    }

    /// Transitions a single event to `completed`.
    ///
    /// # Arguments
    /// - `id` - Event ID
    ///
    /// # Returns
    /// - `Ok(())` - Status updated (or no matching event found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn complete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .filter(entity::event::Column::Id.eq(id))
            .col_expr(
                entity::event::Column::Status,
                Expr::value(EventStatus::Completed.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the audit latch on an event.
    ///
    /// Once set the event is excluded from every future audit selection;
    /// the flag is never cleared.
    ///
    /// # Arguments
    /// - `id` - Event ID
    ///
    /// # Returns
    /// - `Ok(())` - Latch set (or no matching event found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_checked(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Event::update_many()
            .filter(entity::event::Column::Id.eq(id))
            .col_expr(entity::event::Column::Checked, Expr::value(true))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
