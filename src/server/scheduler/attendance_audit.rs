//! Daily attendance audit job.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::Job;

use crate::server::{
    error::AppError, service::attendance::AttendanceAuditService, util::time::local_now,
};

/// Builds the recurring attendance audit job.
///
/// Every tick audits all completed, unchecked events and applies the
/// penalty escalation to their no-show volunteers. If the previous run is
/// still in flight the tick is skipped; the `checked = false` selection is
/// re-evaluated fresh on every run, so a skipped or failed run is retried
/// naturally.
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
                tracing::warn!("Previous attendance audit run still in progress, skipping tick");
                return;
            }

            let now = local_now();
            match AttendanceAuditService::new(&db).run(now).await {
                Ok(summary) => {
                    if summary.events_audited > 0 {
                        tracing::info!(
                            "Attendance audit run: {} events audited, {} warnings issued",
                            summary.events_audited,
                            summary.warnings_issued
                        );
                    }
                }
                Err(e) => tracing::error!("Attendance audit run failed: {}", e),
            }

            running.store(false, Ordering::SeqCst);
        })
    })?;

    Ok(job)
}
