use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::accounts::dtos::AccountResponseDto;
use crate::features::accounts::models::Account;
use crate::features::accounts::services::{AccountService, NewMunicipalityUser};
use crate::features::admin::dtos::*;
use crate::features::auth::guards::RequireAdmin;
use crate::shared::types::ApiResponse;

fn to_dtos(accounts: Vec<Account>) -> Vec<AccountResponseDto> {
    accounts.into_iter().map(AccountResponseDto::from).collect()
}

/// Create a municipality staff account
#[utoipa::path(
    post,
    path = "/api/admin/municipality-users",
    request_body = CreateMunicipalityUserDto,
    responses(
        (status = 201, description = "Municipality user created", body = ApiResponse<AccountResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 409, description = "Account or email already registered")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_municipality_user(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<AccountService>>,
    AppJson(dto): AppJson<CreateMunicipalityUserDto>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service
        .create_municipality_user(
            &user.sub,
            NewMunicipalityUser {
                user_id: dto.user_id,
                name: dto.name,
                email: dto.email,
                phone: dto.phone,
                department: dto.department,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(account.into()),
            Some("Municipality user created successfully".to_string()),
            None,
        )),
    ))
}

/// List municipality staff accounts, newest first
#[utoipa::path(
    get,
    path = "/api/admin/municipality-users",
    responses(
        (status = 200, description = "Municipality users", body = ApiResponse<Vec<AccountResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_municipality_users(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AccountService>>,
) -> Result<Json<ApiResponse<Vec<AccountResponseDto>>>> {
    let accounts = service.list_municipality_users().await?;
    Ok(Json(ApiResponse::list(to_dtos(accounts))))
}

/// List every non-admin account, newest first
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "Commuter and municipality accounts", body = ApiResponse<Vec<AccountResponseDto>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    RequireAdmin(_user): RequireAdmin,
    State(service): State<Arc<AccountService>>,
) -> Result<Json<ApiResponse<Vec<AccountResponseDto>>>> {
    let accounts = service.list_users().await?;
    Ok(Json(ApiResponse::list(to_dtos(accounts))))
}

/// Activate or deactivate an account
#[utoipa::path(
    patch,
    path = "/api/admin/users/{id}/status",
    params(
        ("id" = String, Path, description = "Account ID")
    ),
    request_body = UpdateAccountStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<AccountResponseDto>),
        (status = 400, description = "Cannot change own or admin status"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin access required"),
        (status = 404, description = "Account not found")
    ),
    tag = "admin",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_user_status(
    RequireAdmin(user): RequireAdmin,
    State(service): State<Arc<AccountService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateAccountStatusDto>,
) -> Result<Json<ApiResponse<AccountResponseDto>>> {
    let account = service.update_status(&user.sub, &id, dto.is_active).await?;

    let message = if account.is_active {
        "Account activated"
    } else {
        "Account deactivated"
    };

    Ok(Json(ApiResponse::success(
        Some(account.into()),
        Some(message.to_string()),
        None,
    )))
}
