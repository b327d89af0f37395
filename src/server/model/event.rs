//! Event domain types and parameters.
//!
//! Provides the event lifecycle status enum and parameter types for event
//! creation and volunteer registration operations.

use chrono::NaiveDateTime;

use crate::server::error::{internal::InternalError, AppError};

/// Lifecycle status of an event.
///
/// Transitions are monotonic (`Upcoming → Ongoing → Completed`), driven by
/// the lifecycle advancer. `Cancelled` is applied externally and is final;
/// cancelled events are never advanced or audited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    /// Returns the stored string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }

    /// Parses a stored status string into a typed status.
    ///
    /// # Arguments
    /// - `value` - The stored status string
    ///
    /// # Returns
    /// - `Ok(EventStatus)` - Recognized lifecycle status
    /// - `Err(AppError::InternalErr(UnknownEventStatus))` - Unrecognized value
    pub fn from_str(value: &str) -> Result<Self, AppError> {
        match value {
            "upcoming" => Ok(EventStatus::Upcoming),
            "ongoing" => Ok(EventStatus::Ongoing),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(InternalError::UnknownEventStatus {
                value: value.to_string(),
            }
            .into()),
        }
    }
}

/// Returns the instant at which an event ends.
///
/// # Arguments
/// - `event` - The event entity
///
/// # Returns
/// - `NaiveDateTime` - Scheduled start plus duration in minutes
pub fn end_of(event: &entity::event::Model) -> NaiveDateTime {
    event.date + chrono::Duration::minutes(event.duration as i64)
}

/// Parameters for creating a new event.
///
/// Events are created in `upcoming` status with the audit latch cleared.
#[derive(Debug, Clone)]
pub struct CreateEventParam {
    /// Title of the event.
    pub title: String,
    /// Email of the organizing user (receives registration notifications).
    pub organizer_email: String,
    /// Scheduled start (local wall-clock time).
    pub date: NaiveDateTime,
    /// Duration in minutes, non-negative.
    pub duration: i32,
}

/// Parameters for registering a volunteer for an event.
#[derive(Debug, Clone)]
pub struct RegisterVolunteerParam {
    /// ID of the event to register for.
    pub event_id: i32,
    /// Email of the registering user.
    pub email: String,
}

/// Parameters for an organizer marking a volunteer's attendance.
#[derive(Debug, Clone)]
pub struct SetAttendanceParam {
    /// ID of the event.
    pub event_id: i32,
    /// Email of the registered volunteer.
    pub email: String,
    /// Whether the volunteer was present.
    pub is_present: bool,
}

/// Parameters for a volunteer marking their own attendance with a code.
#[derive(Debug, Clone)]
pub struct SelfAttendanceParam {
    /// ID of the event.
    pub event_id: i32,
    /// Email of the registered volunteer.
    pub email: String,
    /// Code shared by the organizer at the event.
    pub attendance_code: String,
}
