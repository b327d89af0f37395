//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle foreign key relationships,
//! making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let event = factory::event::create_event(&db).await?;
//!
//!     // Create an event together with a registered volunteer
//!     let (event, volunteer) = factory::helpers::create_event_with_volunteer(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .email("volunteer@example.com")
//!     .role("admin")
//!     .warnings(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `event` - Create event entities
//! - `volunteer` - Create event volunteer registrations
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod event;
pub mod helpers;
pub mod user;
pub mod volunteer;

// Re-export commonly used factory functions for concise usage
pub use event::create_event;
pub use user::create_user;
pub use volunteer::create_volunteer;
