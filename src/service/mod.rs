//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and cross-domain side effects
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod achievement;
pub mod auth;
pub mod chat;
pub mod export;
pub mod group;
pub mod meditation;
pub mod stress;
