//! EventUp backend library.
//!
//! Volunteer/event-management backend built around two schedule-driven
//! components: the event lifecycle advancer and the attendance auditor.
//! See the `server` module for the full architecture.

pub mod server;
