use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::accounts::handlers;
use crate::features::accounts::services::AccountService;

/// Account routes for the authenticated caller (auth middleware applied by caller)
pub fn routes(account_service: Arc<AccountService>) -> Router {
    Router::new()
        .route("/api/accounts/register", post(handlers::register))
        .route("/api/accounts/me", get(handlers::get_me))
        .with_state(account_service)
}
