//! User domain models.
//!
//! Provides the typed user model with role and ban-state evaluation. Penalty
//! fields (`warnings`, `ban_until`, `is_permanently_banned`) are written only
//! by the attendance auditor; the registration service reads them to enforce
//! bans.

use chrono::NaiveDateTime;

use crate::server::error::{internal::InternalError, AppError};

/// Role of an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Volunteer,
    PendingOrganizer,
    Organizer,
    Admin,
}

impl Role {
    /// Returns the stored string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Volunteer => "volunteer",
            Role::PendingOrganizer => "pending-organizer",
            Role::Organizer => "organizer",
            Role::Admin => "admin",
        }
    }

    /// Parses a stored role string into a typed role.
    ///
    /// # Arguments
    /// - `value` - The stored role string
    ///
    /// # Returns
    /// - `Ok(Role)` - Recognized role
    /// - `Err(AppError::InternalErr(UnknownUserRole))` - Unrecognized value
    pub fn from_str(value: &str) -> Result<Self, AppError> {
        match value {
            "volunteer" => Ok(Role::Volunteer),
            "pending-organizer" => Ok(Role::PendingOrganizer),
            "organizer" => Ok(Role::Organizer),
            "admin" => Ok(Role::Admin),
            _ => Err(InternalError::UnknownUserRole {
                value: value.to_string(),
            }
            .into()),
        }
    }
}

/// Ban state of a user at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BanStatus {
    /// Not banned.
    None,
    /// Temporarily banned until the contained instant.
    Temporary(NaiveDateTime),
    /// Permanently banned; never expires.
    Permanent,
}

/// User with identity, role and accountability state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Email of the user (unique key).
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Role of the user.
    pub role: Role,
    /// Accumulated no-show warnings, monotonically increasing.
    pub warnings: i32,
    /// Expiration of a temporary ban, if one was ever issued.
    pub ban_until: Option<NaiveDateTime>,
    /// One-way permanent ban latch.
    pub is_permanently_banned: bool,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownUserRole))` - Stored role string
    ///   did not match any known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::from_str(&entity.role)?;

        Ok(Self {
            email: entity.email,
            name: entity.name,
            role,
            warnings: entity.warnings,
            ban_until: entity.ban_until,
            is_permanently_banned: entity.is_permanently_banned,
        })
    }

    /// Evaluates the user's ban state at the given instant.
    ///
    /// A permanent ban always wins; a `ban_until` in the past is no ban at
    /// all (expired bans are not cleared, only outlived).
    ///
    /// # Arguments
    /// - `now` - The instant to evaluate against (local wall-clock time)
    ///
    /// # Returns
    /// - `BanStatus` - The user's effective ban state at `now`
    pub fn ban_status(&self, now: NaiveDateTime) -> BanStatus {
        if self.is_permanently_banned {
            return BanStatus::Permanent;
        }

        match self.ban_until {
            Some(until) if until > now => BanStatus::Temporary(until),
            _ => BanStatus::None,
        }
    }

    /// Whether the user has the admin role.
    ///
    /// Admin users are exempt from the penalty pipeline entirely.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
