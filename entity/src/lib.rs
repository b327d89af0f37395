//! SeaORM entity definitions for the EventUp backend.
//!
//! Entities are thin database mappings; typed domain models and enums live
//! in the application's model layer. String-typed columns such as
//! `event::status` and `user::role` are converted at the repository
//! boundary.

pub mod event;
pub mod event_volunteer;
pub mod notification;
pub mod prelude;
pub mod user;
