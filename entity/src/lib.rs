//! SeaORM entity models for the Serenly database schema.
//!
//! Each module defines the entity for one table. Entities are kept free of
//! business logic; conversion to domain models happens at the repository
//! boundary in the server crate.

pub mod achievement;
pub mod chat_message;
pub mod group_participant;
pub mod group_session;
pub mod meditation_session;
pub mod prelude;
pub mod stress_assessment;
pub mod user;
pub mod user_achievement;
