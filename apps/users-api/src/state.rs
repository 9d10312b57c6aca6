//! Shared state handed to the readiness handler and the route builders.

/// Cloned per request; the connection is a pooled handle.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub db: database::postgres::DatabaseConnection,
}
