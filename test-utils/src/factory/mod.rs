//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
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
//!     let achievement = factory::achievement::create_achievement(&db).await?;
//!
//!     // Create with all dependencies
//!     let (host, session) = factory::helpers::create_group_session_with_host(&db).await?;
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
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .email("custom@example.com")
//!     .display_name("Custom User")
//!     .build()
//!     .await?;
//!
//! // Using convenience functions with custom values
//! let assessment = factory::create_assessment_with_score(&db, user.id, 8).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `achievement` - Create achievement definition entities
//! - `user_achievement` - Create user achievement progress entities
//! - `meditation_session` - Create meditation session entities
//! - `stress_assessment` - Create stress assessment entities
//! - `group_session` - Create group session entities
//! - `group_participant` - Create group participant entities
//! - `chat_message` - Create chat message entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod achievement;
pub mod chat_message;
pub mod group_participant;
pub mod group_session;
pub mod helpers;
pub mod meditation_session;
pub mod stress_assessment;
pub mod user;
pub mod user_achievement;

// Re-export commonly used factory functions for concise usage
pub use achievement::create_achievement;
pub use chat_message::create_message;
pub use group_participant::create_participant;
pub use group_session::create_group_session;
pub use meditation_session::{create_completed_session, create_session};
pub use stress_assessment::{create_assessment, create_assessment_with_score};
pub use user::create_user;
pub use user_achievement::create_user_achievement;
