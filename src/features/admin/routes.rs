use std::sync::Arc;

use axum::{
    routing::{get, patch},
    Router,
};

use crate::features::accounts::services::AccountService;
use crate::features::admin::handlers;

/// Create admin routes (all require admin access, nested under `/api/admin`)
pub fn routes(account_service: Arc<AccountService>) -> Router {
    Router::new()
        .route(
            "/municipality-users",
            get(handlers::list_municipality_users).post(handlers::create_municipality_user),
        )
        .route("/users", get(handlers::list_users))
        .route("/users/{id}/status", patch(handlers::update_user_status))
        .with_state(account_service)
}
