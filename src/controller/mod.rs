//! HTTP controller layer.
//!
//! Controllers authenticate the request through the auth guard, convert DTOs
//! to parameter models, call into the service layer, and convert the returned
//! domain models back to DTOs. Every endpoint carries a `utoipa::path`
//! annotation feeding the OpenAPI document served at `/api-docs`.

use serde::Deserialize;

pub mod achievement;
pub mod auth;
pub mod chat;
pub mod export;
pub mod group;
pub mod meditation;
pub mod stress;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

pub(crate) fn default_per_page() -> u64 {
    10
}
