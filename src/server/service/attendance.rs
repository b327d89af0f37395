//! Attendance auditing and penalty escalation.
//!
//! Processes freshly-completed events: every registered volunteer who was
//! not marked present receives one warning, escalating through temporary
//! bans to a permanent ban. Each event is audited at most once via its
//! `checked` latch.

use chrono::{Duration, NaiveDateTime};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, notification::NotificationRepository, user::UserRepository,
        volunteer::VolunteerRepository,
    },
    error::AppError,
    model::notification::{NewNotificationParam, NotificationKind},
};

/// Days of temporary ban issued with the second warning.
const SECOND_WARNING_BAN_DAYS: i64 = 10;
/// Days of temporary ban issued with the third warning.
const THIRD_WARNING_BAN_DAYS: i64 = 20;

/// Penalty derived from a volunteer's new cumulative warning count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penalty {
    /// Notification headline.
    pub message: &'static str,
    /// Notification explanatory text naming the event.
    pub reason: String,
    /// Temporary ban expiration to set, if this tier carries one.
    pub ban_until: Option<NaiveDateTime>,
    /// Whether this tier latches the permanent ban.
    pub permanent: bool,
}

impl Penalty {
    /// Resolves the escalation table for a new warning count.
    ///
    /// Tiers 1 and ≥4 carry no `ban_until`, so a pre-existing temporary ban
    /// date is left untouched by the subsequent update.
    ///
    /// # Arguments
    /// - `new_count` - The volunteer's warning count after this penalty
    /// - `event_title` - Title of the missed event, named in the reason
    /// - `now` - Current local wall-clock instant, base for ban arithmetic
    ///
    /// # Returns
    /// - `Penalty` - Message, reason and ban effect for this tier
    pub fn for_count(new_count: i32, event_title: &str, now: NaiveDateTime) -> Self {
        match new_count {
            1 => Self {
                message: "You missed an event!",
                reason: format!(
                    "You have received a warning for not attending the event titled \"{}\". \
                     Please remember to attend future events.",
                    event_title
                ),
                ban_until: None,
                permanent: false,
            },
            2 => Self {
                message: "Second warning received and a temporary ban!",
                reason: format!(
                    "This is your second warning for not attending the event titled \"{}\". \
                     As a result, you are temporarily banned from registering for events for \
                     10 days.",
                    event_title
                ),
                ban_until: Some(now + Duration::days(SECOND_WARNING_BAN_DAYS)),
                permanent: false,
            },
            3 => Self {
                message: "Third warning received and a temporary ban!",
                reason: format!(
                    "This is your third and final warning for not attending the event titled \
                     \"{}\". You are temporarily banned from registering for events for 20 \
                     days. Further absences will result in a permanent ban.",
                    event_title
                ),
                ban_until: Some(now + Duration::days(THIRD_WARNING_BAN_DAYS)),
                permanent: false,
            },
            _ => Self {
                message: "Permanently banned.",
                reason: format!(
                    "You have been permanently banned from registering for events due to \
                     repeated absences, including the event titled \"{}\".",
                    event_title
                ),
                ban_until: None,
                permanent: true,
            },
        }
    }
}

/// Outcome of one attendance audit run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditSummary {
    /// Events whose audit pass ran (successfully or not) and were latched.
    pub events_audited: u64,
    /// Warnings issued across all audited events.
    pub warnings_issued: u64,
}

/// Service penalizing no-show volunteers on completed events.
pub struct AttendanceAuditService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AttendanceAuditService<'a> {
    /// Creates a new AttendanceAuditService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AttendanceAuditService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one attendance audit pass.
    ///
    /// Selects every completed event whose `checked` latch is clear and
    /// audits each independently: a failure inside one event's pass is
    /// logged and the loop continues with the next event. The latch is set
    /// at the end of each event's pass regardless of per-volunteer
    /// outcomes, so an event is never penalized twice.
    ///
    /// # Arguments
    /// - `now` - Current local wall-clock instant, resolved once per run
    ///
    /// # Returns
    /// - `Ok(AuditSummary)` - Counts of audited events and issued warnings
    /// - `Err(AppError::DbErr)` - Failed to query the audit queue; the next
    ///   scheduled run re-queries the same unchecked set
    pub async fn run(&self, now: NaiveDateTime) -> Result<AuditSummary, AppError> {
        let event_repo = EventRepository::new(self.db);

        let mut summary = AuditSummary::default();
        for event in event_repo.get_unaudited_completed().await? {
            match self.audit_event(&event, now).await {
                Ok(issued) => summary.warnings_issued += issued,
                Err(e) => {
                    tracing::error!("Attendance audit for event {} failed: {}", event.id, e);
                }
            }
            summary.events_audited += 1;
        }

        Ok(summary)
    }

    /// Audits a single event and sets its `checked` latch.
    ///
    /// The latch is set even when the volunteer pass failed partway; the
    /// original error is then returned after latching.
    async fn audit_event(
        &self,
        event: &entity::event::Model,
        now: NaiveDateTime,
    ) -> Result<u64, AppError> {
        let result = self.audit_volunteers(event, now).await;

        EventRepository::new(self.db).mark_checked(event.id).await?;

        result
    }

    /// Penalizes every absent volunteer of one event.
    ///
    /// An error aborts the remaining volunteers of this event; earlier
    /// penalties stand (each is an independent, complete write).
    async fn audit_volunteers(
        &self,
        event: &entity::event::Model,
        now: NaiveDateTime,
    ) -> Result<u64, AppError> {
        let user_repo = UserRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let mut issued = 0;
        for volunteer in VolunteerRepository::new(self.db)
            .get_by_event(event.id)
            .await?
        {
            // None and Some(false) both count as absent
            if volunteer.is_present == Some(true) {
                continue;
            }

            // A registration may outlive its user record; skip silently
            let Some(user) = user_repo.find_by_email(&volunteer.email).await? else {
                tracing::debug!(
                    "No user record for volunteer {} on event {}, skipping",
                    volunteer.email,
                    event.id
                );
                continue;
            };

            if user.is_admin() {
                continue;
            }

            let penalty = Penalty::for_count(user.warnings + 1, &event.title, now);
            user_repo
                .apply_warning(&user.email, penalty.ban_until, penalty.permanent)
                .await?;

            notification_repo
                .create(
                    NewNotificationParam {
                        email: user.email,
                        message: penalty.message.to_string(),
                        reason: penalty.reason,
                        kind: NotificationKind::Warning,
                    },
                    now,
                )
                .await?;

            issued += 1;
        }

        Ok(issued)
    }
}
