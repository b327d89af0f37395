//! Event lifecycle advancement.
//!
//! Drives events through `upcoming → ongoing → completed` by comparing the
//! stored start time and duration against the run's local wall-clock
//! instant. `cancelled` is final and never touched here.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{end_of, EventStatus},
};

/// Outcome of one lifecycle advancement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleSummary {
    /// Events transitioned from `upcoming` to `ongoing`.
    pub started: u64,
    /// Events transitioned from `ongoing` to `completed`.
    pub completed: u64,
}

/// Service advancing events through their time-based lifecycle states.
pub struct LifecycleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> LifecycleService<'a> {
    /// Creates a new LifecycleService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LifecycleService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one lifecycle advancement pass.
    ///
    /// Two passes against the same `now`:
    /// 1. Bulk transition: every `upcoming` event whose start has passed
    ///    becomes `ongoing` in a single set-based update.
    /// 2. Completion check: every `ongoing` event whose end
    ///    (`date + duration` minutes) has passed is individually
    ///    transitioned to `completed`.
    ///
    /// A zero-duration event whose start has passed completes within the
    /// same call: the bulk pass makes it ongoing and the completion pass
    /// closes it. The whole operation is idempotent; both filters exclude
    /// already-transitioned events, so a repeated run is a no-op.
    ///
    /// Any store error aborts the run; the caller logs it and the next
    /// scheduled run redoes the whole scan safely.
    ///
    /// # Arguments
    /// - `now` - Current local wall-clock instant, resolved once per run
    ///
    /// # Returns
    /// - `Ok(LifecycleSummary)` - Counts of transitions performed
    /// - `Err(AppError::DbErr)` - Database error; no partial-state cleanup
    ///   is needed since every transition is independently valid
    pub async fn advance(&self, now: NaiveDateTime) -> Result<LifecycleSummary, AppError> {
        let event_repo = EventRepository::new(self.db);

        let started = event_repo.start_due_events(now).await?;

        let mut completed = 0;
        for event in event_repo.get_by_status(EventStatus::Ongoing).await? {
            if now >= end_of(&event) {
                event_repo.complete(event.id).await?;
                completed += 1;
            }
        }

        Ok(LifecycleSummary { started, completed })
    }
}
