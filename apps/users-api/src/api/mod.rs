use axum::{Router, routing::get};

pub mod health;
pub mod users;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(domain_users::handlers::URL, users::router(state))
}

/// `/ready` with state applied, mergeable into the stateless app router
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
