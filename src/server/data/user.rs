//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for reading user records and
//! applying attendance penalties. The warning counter is incremented inside
//! the database rather than read-modify-written, so concurrent schedules or
//! API mutations cannot lose an increment; the remaining penalty fields are
//! targeted per-key writes with last-writer-wins semantics.

use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
};

use crate::server::{error::AppError, model::user::User};

/// Repository providing database operations for user accountability state.
///
/// Users themselves are created by the (out-of-scope) account surface; this
/// repository only reads them and mutates the penalty fields.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email and converts it to the domain model.
    ///
    /// # Arguments
    /// - `email` - Email of the user (unique key)
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found with typed role and penalty state
    /// - `Ok(None)` - No user with that email
    /// - `Err(AppError::InternalErr)` - Stored role string was unrecognized
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(email.to_string())
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Applies one attendance warning to a user.
    ///
    /// Increments `warnings` atomically in the database (`warnings + 1`).
    /// `ban_until` is only written when the escalation tier carries an
    /// explicit ban date; otherwise any pre-existing value is preserved.
    /// `is_permanently_banned` is only ever set, never cleared.
    ///
    /// # Arguments
    /// - `email` - Email of the user (unique key)
    /// - `ban_until` - Temporary ban expiration to set, if any
    /// - `permanent` - Whether to latch the permanent ban
    ///
    /// # Returns
    /// - `Ok(())` - Penalty applied (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn apply_warning(
        &self,
        email: &str,
        ban_until: Option<NaiveDateTime>,
        permanent: bool,
    ) -> Result<(), DbErr> {
        let mut update = entity::prelude::User::update_many()
            .filter(entity::user::Column::Email.eq(email))
            .col_expr(
                entity::user::Column::Warnings,
                Expr::col(entity::user::Column::Warnings).add(1),
            );

        if let Some(until) = ban_until {
            update = update.col_expr(entity::user::Column::BanUntil, Expr::value(Some(until)));
        }

        if permanent {
            update = update.col_expr(
                entity::user::Column::IsPermanentlyBanned,
                Expr::value(true),
            );
        }

        update.exec(self.db).await?;
        Ok(())
    }
}
