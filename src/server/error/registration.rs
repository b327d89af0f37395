use chrono::NaiveDateTime;
use thiserror::Error;

/// Violations of registration business rules.
///
/// These carry the user-facing texts for the registration surface; ban
/// refusals are the downstream consumers of the attendance auditor's
/// `ban_until` / `is_permanently_banned` writes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistrationError {
    /// The user is temporarily banned from registering for events.
    #[error("You are temporarily banned from registering for events until {until}.")]
    TemporarilyBanned {
        /// When the ban expires (local wall-clock time).
        until: NaiveDateTime,
    },

    /// The user has been permanently banned from registering for events.
    #[error("You have been permanently banned from registering for events due to repeated absences.")]
    PermanentlyBanned,

    /// The user is already registered for this event.
    #[error("Already registered for this event")]
    AlreadyRegistered,

    /// The user is not registered for this event.
    #[error("Not registered for this event")]
    NotRegistered,

    /// The provided self-attendance code does not match the event's code.
    #[error("Invalid attendance code")]
    InvalidAttendanceCode,
}
