use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored event status string does not match any known lifecycle state.
    ///
    /// Statuses are only written through `EventStatus::as_str`, so this
    /// indicates corrupted data or an out-of-band write.
    #[error("Unknown event status '{value}' in store")]
    UnknownEventStatus {
        /// The status string that failed to parse
        value: String,
    },

    /// A stored user role string does not match any known role.
    ///
    /// Roles are assigned by the (out-of-scope) account surface; an unknown
    /// value indicates corrupted data or a schema drift.
    #[error("Unknown user role '{value}' in store")]
    UnknownUserRole {
        /// The role string that failed to parse
        value: String,
    },
}
