//! Error types for the EventUp backend.
//!
//! This module provides the application's error hierarchy. The `AppError`
//! enum serves as the top-level error type that wraps domain-specific
//! errors. Most variants use `#[from]` for automatic error conversion.
//! Scheduler-driven components log failures via `tracing` and rely on the
//! next scheduled run for retry; nothing here is surfaced to an end user.

pub mod config;
pub mod internal;
pub mod registration;

use thiserror::Error;

use crate::server::error::{
    config::ConfigError, internal::InternalError, registration::RegistrationError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application.
/// Domain-specific errors like `RegistrationError` carry their own
/// user-facing messages; infrastructure errors are wrapped transparently.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Violation of a registration business rule (bans, duplicates, codes).
    #[error(transparent)]
    RegistrationErr(#[from] RegistrationError),

    /// Internal issue indicating unexpected stored data or a bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// I/O error from the runtime (e.g. the shutdown signal handler).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}
