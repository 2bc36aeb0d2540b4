use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::accounts::dtos::{AccountResponseDto, RegisterAccountDto};
use crate::features::accounts::services::{AccountService, NewAccount};
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::ApiResponse;
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/accounts/register",
    request_body = RegisterAccountDto,
    responses(
        (status = 201, description = "Account registered", body = ApiResponse<AccountResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Account or email already registered")
    ),
    tag = "accounts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn register(
    user: AuthenticatedUser,
    State(service): State<Arc<AccountService>>,
    AppJson(dto): AppJson<RegisterAccountDto>,
) -> Result<(StatusCode, Json<ApiResponse<AccountResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let account = service
        .register_commuter(
            &user.sub,
            NewAccount {
                name: dto.name,
                email: dto.email,
                phone: dto.phone,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(account.into()),
            Some("Account registered successfully".to_string()),
            None,
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/accounts/me",
    responses(
        (status = 200, description = "Caller's account", body = ApiResponse<AccountResponseDto>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account not registered")
    ),
    tag = "accounts",
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_me(
    user: AuthenticatedUser,
    State(service): State<Arc<AccountService>>,
) -> Result<Json<ApiResponse<AccountResponseDto>>> {
    let account = service.get(&user.sub).await?;
    Ok(Json(ApiResponse::success(Some(account.into()), None, None)))
}
