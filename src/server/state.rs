//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Name of the workspace used when a request does not select one.
    pub default_workspace: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `default_workspace` - Fallback workspace name for the request context
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, default_workspace: String) -> Self {
        Self {
            db,
            default_workspace,
        }
    }
}
