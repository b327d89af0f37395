//! Hourly event lifecycle job.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::Job;

use crate::server::{error::AppError, service::lifecycle::LifecycleService, util::time::local_now};

/// Builds the recurring event lifecycle job.
///
/// Every tick advances due events (`upcoming → ongoing`, `ongoing →
/// completed`) against a freshly resolved local "now". If the previous run
/// is still in flight the tick is skipped; the filters are stateless, so
/// the next tick naturally catches up on anything a skipped or failed run
/// left behind.
///
/// # Arguments
/// - `db`: Database connection
/// - `cron`: 6-field cron expression for the trigger
///
/// # Returns
/// - `Ok(Job)` - Job ready to be added to a scheduler
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression
pub fn job(db: DatabaseConnection, cron: &str) -> Result<Job, AppError> {
    let running = Arc::new(AtomicBool::new(false));

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let db = db.clone();
        let running = running.clone();

        Box::pin(async move {
            if running
                .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                tracing::warn!("Previous event lifecycle run still in progress, skipping tick");
                return;
            }

            let now = local_now();
            match LifecycleService::new(&db).advance(now).await {
                Ok(summary) => {
                    if summary.started > 0 || summary.completed > 0 {
                        tracing::info!(
                            "Event lifecycle run: {} started, {} completed",
                            summary.started,
                            summary.completed
                        );
                    }
                }
                Err(e) => tracing::error!("Event lifecycle run failed: {}", e),
            }

            running.store(false, Ordering::SeqCst);
        })
    })?;

    Ok(job)
}
