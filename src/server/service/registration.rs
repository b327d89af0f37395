//! Volunteer registration and attendance marking.
//!
//! The registration surface is where the auditor's penalty state bites:
//! users with an active temporary ban or the permanent latch are refused.
//! Organizers are notified about registrations and cancellations.

use chrono::NaiveDateTime;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        event::EventRepository, notification::NotificationRepository, user::UserRepository,
        volunteer::VolunteerRepository,
    },
    error::{registration::RegistrationError, AppError},
    model::{
        event::{RegisterVolunteerParam, SelfAttendanceParam, SetAttendanceParam},
        notification::{NewNotificationParam, NotificationKind},
        user::{BanStatus, User},
    },
};

/// Service handling volunteer registration and attendance operations.
pub struct RegistrationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new RegistrationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RegistrationService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a volunteer for an event.
    ///
    /// Refuses banned users (temporary bans are evaluated against `now`; an
    /// expired ban no longer blocks) and duplicate registrations. On success
    /// the organizer receives a `success` notification naming the volunteer
    /// and event.
    ///
    /// # Arguments
    /// - `param` - Event ID and volunteer email
    /// - `now` - Current local wall-clock instant
    ///
    /// # Returns
    /// - `Ok(Model)` - The created registration
    /// - `Err(AppError::NotFound)` - Unknown user or event
    /// - `Err(AppError::RegistrationErr)` - Banned or already registered
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(
        &self,
        param: RegisterVolunteerParam,
        now: NaiveDateTime,
    ) -> Result<entity::event_volunteer::Model, AppError> {
        let user = self.require_user(&param.email).await?;

        match user.ban_status(now) {
            BanStatus::Permanent => return Err(RegistrationError::PermanentlyBanned.into()),
            BanStatus::Temporary(until) => {
                return Err(RegistrationError::TemporarilyBanned { until }.into())
            }
            BanStatus::None => {}
        }

        let event = self.require_event(param.event_id).await?;

        let volunteer_repo = VolunteerRepository::new(self.db);
        if volunteer_repo.find(event.id, &user.email).await?.is_some() {
            return Err(RegistrationError::AlreadyRegistered.into());
        }

        let volunteer = volunteer_repo
            .register(event.id, &user.email, &user.name, now)
            .await?;

        NotificationRepository::new(self.db)
            .create(
                NewNotificationParam {
                    email: event.organizer_email.clone(),
                    message: "New Volunteer Registered".to_string(),
                    reason: format!(
                        "A new volunteer named {} has registered for your event: \"{}\".",
                        user.name, event.title
                    ),
                    kind: NotificationKind::Success,
                },
                now,
            )
            .await?;

        Ok(volunteer)
    }

    /// Cancels a volunteer's registration for an event.
    ///
    /// Removes the registration row and sends the organizer a `sorry`
    /// notification.
    ///
    /// # Arguments
    /// - `param` - Event ID and volunteer email
    /// - `now` - Current local wall-clock instant
    ///
    /// # Returns
    /// - `Ok(())` - Registration removed and organizer notified
    /// - `Err(AppError::NotFound)` - Unknown event
    /// - `Err(AppError::RegistrationErr(NotRegistered))` - No such registration
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn cancel(
        &self,
        param: RegisterVolunteerParam,
        now: NaiveDateTime,
    ) -> Result<(), AppError> {
        let event = self.require_event(param.event_id).await?;

        let removed = VolunteerRepository::new(self.db)
            .remove(event.id, &param.email)
            .await?;
        if removed == 0 {
            return Err(RegistrationError::NotRegistered.into());
        }

        NotificationRepository::new(self.db)
            .create(
                NewNotificationParam {
                    email: event.organizer_email.clone(),
                    message: "Volunteer Cancelled Registration".to_string(),
                    reason: format!(
                        "A volunteer with the email {} has cancelled their registration for \
                         your event: \"{}\".",
                        param.email, event.title
                    ),
                    kind: NotificationKind::Sorry,
                },
                now,
            )
            .await?;

        Ok(())
    }

    /// Marks a registered volunteer's attendance on behalf of an organizer.
    ///
    /// # Arguments
    /// - `param` - Event ID, volunteer email and the presence flag
    ///
    /// # Returns
    /// - `Ok(())` - Presence flag updated
    /// - `Err(AppError::NotFound)` - Unknown event
    /// - `Err(AppError::RegistrationErr(NotRegistered))` - No such registration
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_attendance(&self, param: SetAttendanceParam) -> Result<(), AppError> {
        let event = self.require_event(param.event_id).await?;

        let updated = VolunteerRepository::new(self.db)
            .set_presence(event.id, &param.email, param.is_present)
            .await?;
        if updated == 0 {
            return Err(RegistrationError::NotRegistered.into());
        }

        Ok(())
    }

    /// Marks a volunteer present from their own device using the event code.
    ///
    /// The code is the one the organizer shares at the event; a mismatch is
    /// refused without revealing the stored code.
    ///
    /// # Arguments
    /// - `param` - Event ID, volunteer email and the presented code
    ///
    /// # Returns
    /// - `Ok(())` - Volunteer marked present
    /// - `Err(AppError::NotFound)` - Unknown event
    /// - `Err(AppError::RegistrationErr)` - Not registered or wrong code
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn mark_self_attendance(&self, param: SelfAttendanceParam) -> Result<(), AppError> {
        let event = self.require_event(param.event_id).await?;

        let volunteer_repo = VolunteerRepository::new(self.db);
        if volunteer_repo.find(event.id, &param.email).await?.is_none() {
            return Err(RegistrationError::NotRegistered.into());
        }

        if event.attendance_code.as_deref() != Some(param.attendance_code.as_str()) {
            return Err(RegistrationError::InvalidAttendanceCode.into());
        }

        volunteer_repo
            .set_presence(event.id, &param.email, true)
            .await?;

        Ok(())
    }

    async fn require_user(&self, email: &str) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    async fn require_event(&self, event_id: i32) -> Result<entity::event::Model, AppError> {
        EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
    }
}
