//! Business logic layer.
//!
//! Services orchestrate repositories and carry the domain rules: the event
//! lifecycle state machine, the attendance-penalty escalation, ban-enforced
//! registration and event creation. Every service method that compares
//! against "now" takes the instant as a parameter; the scheduler layer
//! resolves the local clock once per run.

pub mod attendance;
pub mod event;
pub mod lifecycle;
pub mod registration;

#[cfg(test)]
mod test;
