//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Per-lot lock registry serializing occupancy transitions

use sea_orm::DatabaseConnection;

use super::service::lot_lock::LotLockService;

/// Application state containing shared resources and dependencies.
///
/// This struct holds all the shared state that needs to be accessible across
/// request handlers. It is initialized once during server startup and then
/// cloned (cheaply, as it contains reference-counted or cloneable types) for
/// each incoming request via Axum's state extraction.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `LotLockService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// This connection is shared across all requests and manages a pool of
    /// connections to the SQLite database.
    pub db: DatabaseConnection,

    /// Per-lot locks for the occupancy engine.
    ///
    /// Check-in and check-out acquire the lock of the targeted lot so
    /// concurrent transitions against the same lot apply one at a time.
    pub lot_locks: LotLockService,
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
    /// - `lot_locks` - Per-lot lock registry
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, lot_locks: LotLockService) -> Self {
        Self { db, lot_locks }
    }
}
