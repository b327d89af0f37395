//! Backend implementation for the EventUp volunteer platform.
//!
//! This module contains the complete backend implementation: scheduled
//! tasks, business logic, data access and infrastructure services. The
//! backend uses SeaORM for database operations and tokio-cron-scheduler
//! for the recurring lifecycle and audit jobs.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Scheduler Layer** (`scheduler/`) - Cron-driven jobs with re-entrancy guards
//! - **Service Layer** (`service/`) - Business logic orchestration between schedulers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, enums and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Initialization of database, migrations and logging
//! - **Util** (`util`) - Small shared helpers (local clock)
//!
//! # Task Flow
//!
//! A scheduler tick flows through these layers:
//!
//! 1. **Scheduler** fires on its cron trigger, skips the tick if the
//!    previous run is still in flight, and resolves the local "now"
//! 2. **Service** executes the run's business logic against that instant
//! 3. **Data** performs targeted queries and field-level updates
//! 4. **Scheduler** logs the run summary or the failure; the next tick
//!    retries naturally because all selections are re-evaluated fresh

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod util;
