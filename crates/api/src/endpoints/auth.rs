//! Authentication endpoints.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use linkup_common::AppResult;
use linkup_core::{ChangePasswordInput, LoginInput, RegisterInput};
use serde::Serialize;

use crate::{
    endpoints::users::UserResponse,
    extractors::{AuthUser, BearerToken},
    middleware::AppState,
    response::{ApiResponse, no_content},
};

/// Register a new identity.
async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = state.user_service.register(input).await?;
    Ok(ApiResponse::created(user.into()))
}

/// Login response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: UserResponse,
}

/// Sign in with email and password.
async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<ApiResponse<LoginResponse>> {
    let (user, token) = state.user_service.login(input).await?;

    Ok(ApiResponse::ok(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// Token response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub token: String,
}

/// Exchange the presented token for a fresh one.
async fn refresh(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<TokenResponse>> {
    let token = state.user_service.refresh(&token).await?;
    Ok(ApiResponse::ok(TokenResponse { token }))
}

/// Revoke the presented token.
async fn logout(
    BearerToken(token): BearerToken,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state.user_service.logout(&token).await?;
    Ok(no_content())
}

/// Revoke every token of the authenticated identity.
async fn logout_all(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> AppResult<StatusCode> {
    state.user_service.logout_all(&user.id).await?;
    Ok(no_content())
}

/// Change the account password. Existing sessions are revoked; the
/// response carries the replacement token.
async fn change_password(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePasswordInput>,
) -> AppResult<ApiResponse<TokenResponse>> {
    let token = state.user_service.change_password(&user.id, input).await?;
    Ok(ApiResponse::ok(TokenResponse { token }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
        .route("/logout-all", post(logout_all))
        .route("/change-password", post(change_password))
}
