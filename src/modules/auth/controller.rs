use axum::{Json, extract::State};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{LoginRequest, LoginResponse, LogoutResponse};
use super::service::AuthService;

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Missing username or password"),
        (status = 404, description = "Invalid credentials")
    ),
    tag = "Authentication"
)]
pub async fn login_user(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Please provide both username and password"
        )));
    };

    let response = AuthService::login(&state.db, &state.tokens, &username, &password).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/logout",
    responses(
        (status = 200, description = "Token revoked", body = LogoutResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Authentication",
    security(("token" = []))
)]
pub async fn logout_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<LogoutResponse>, AppError> {
    state.tokens.revoke(auth_user.0.id).await?;

    Ok(Json(LogoutResponse {
        success: "Successfully logged out.".to_string(),
    }))
}
