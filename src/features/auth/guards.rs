//! Role-based authorization guards.
//!
//! Roles (from highest to lowest):
//! - admin: manages accounts, can act as municipal staff
//! - municipality: triages, assigns and completes reports
//! - commuter: submits and tracks own reports
//!
//! Any authenticated user has commuter capabilities, so there is no commuter guard;
//! extract `AuthenticatedUser` directly instead.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn authenticated(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Guard for admin-only endpoints.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

/// Guard for municipal staff endpoints.
///
/// Allows users with "municipality" or "admin" roles.
pub struct RequireMunicipality(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireMunicipality
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.has_municipality_access() {
            return Err(AppError::Forbidden(
                "Municipality access required".to_string(),
            ));
        }

        Ok(RequireMunicipality(user.clone()))
    }
}
