//! Cron-driven background jobs.
//!
//! Two independent recurring tasks run against the shared store: the event
//! lifecycle job (hourly by default) and the attendance audit job (daily by
//! default). Each job carries its own re-entrancy guard so an overrunning
//! run causes later ticks to be skipped rather than overlapped, and each
//! tick resolves the local wall-clock instant freshly before calling into
//! the service layer.

pub mod attendance_audit;
pub mod event_lifecycle;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::JobScheduler;

use crate::server::{config::Config, error::AppError};

/// Starts the background job scheduler.
///
/// Registers the event lifecycle job and the attendance audit job on one
/// scheduler using the cron expressions from configuration, then starts it.
///
/// # Arguments
/// - `db`: Database connection
/// - `config`: Application configuration carrying the cron expressions
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler handle, used for shutdown
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    db: DatabaseConnection,
    config: &Config,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    scheduler
        .add(event_lifecycle::job(db.clone(), &config.lifecycle_cron)?)
        .await?;
    scheduler
        .add(attendance_audit::job(db, &config.audit_cron)?)
        .await?;

    scheduler.start().await?;

    tracing::info!("Event schedulers started");

    Ok(scheduler)
}
