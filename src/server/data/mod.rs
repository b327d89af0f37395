//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! perform all queries, inserts and targeted field-level updates. Status and role
//! strings are converted to typed domain values at this boundary where useful.

pub mod event;
pub mod notification;
pub mod user;
pub mod volunteer;
