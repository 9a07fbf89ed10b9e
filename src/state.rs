//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `String` is cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Secret used to sign and verify bearer tokens.
    pub jwt_secret: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// This constructor is called once during server startup after all
    /// dependencies have been initialized. The resulting state is then
    /// provided to the Axum router for use in request handlers.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt_secret` - Secret used to sign and verify bearer tokens
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, jwt_secret: String) -> Self {
        Self { db, jwt_secret }
    }
}
