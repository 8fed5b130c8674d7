use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::profiles::model::{Profile, Role};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor that resolves the bearer token to the calling profile.
///
/// Adding this to a handler's arguments makes the route require a valid
/// token; the token table is consulted on every request, so a revoked token
/// fails immediately.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Profile);

impl AuthUser {
    pub fn role(&self) -> Role {
        self.0.function
    }

    /// The id of the caller's own school.
    pub fn school_id(&self) -> i32 {
        self.0.school
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AppError::unauthorized(anyhow::anyhow!("Missing authorization header"))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::unauthorized(anyhow::anyhow!("Invalid authorization header format"))
        })?;

        let profile = state
            .tokens
            .validate(token)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("Invalid token")))?;

        Ok(AuthUser(profile))
    }
}
