//! Notification data repository.
//!
//! Append-only inserts; reading and acknowledging notifications belongs to
//! surfaces outside this crate.

use chrono::NaiveDateTime;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::notification::NewNotificationParam;

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one notification record.
    ///
    /// `read` and `toast_shown` start false.
    ///
    /// # Arguments
    /// - `param` - Recipient, headline, explanatory text and kind
    /// - `now` - Notification timestamp (local wall-clock time)
    ///
    /// # Returns
    /// - `Ok(Model)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: NewNotificationParam,
        now: NaiveDateTime,
    ) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            email: ActiveValue::Set(param.email),
            message: ActiveValue::Set(param.message),
            reason: ActiveValue::Set(param.reason),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            read: ActiveValue::Set(false),
            toast_shown: ActiveValue::Set(false),
            timestamp: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
