use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use crate::modules::profiles::model::Profile;
use crate::utils::errors::AppError;
use crate::utils::password::verify_password;
use crate::utils::token::generate_token;

use super::model::{Credentials, LoginResponse};

/// Store of opaque API tokens, one row per profile in `auth_tokens`.
///
/// Issue is get-or-create: logging in twice returns the same token until it
/// is revoked. Validation resolves a token straight to its profile.
#[derive(Clone, Debug)]
pub struct TokenStore {
    db: PgPool,
}

impl TokenStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    #[instrument(skip(self), fields(profile.id = %profile_id, db.table = "auth_tokens"))]
    pub async fn issue(&self, profile_id: i32) -> Result<String, AppError> {
        // DO UPDATE with the existing value makes the insert a no-op upsert,
        // so RETURNING yields the stored token either way.
        let token = sqlx::query_scalar::<_, String>(
            "INSERT INTO auth_tokens (token, profile_id) VALUES ($1, $2)
             ON CONFLICT (profile_id) DO UPDATE SET token = auth_tokens.token
             RETURNING token",
        )
        .bind(generate_token())
        .bind(profile_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error issuing token");
            AppError::from(e)
        })?;

        Ok(token)
    }

    #[instrument(skip_all, fields(db.table = "auth_tokens"))]
    pub async fn validate(&self, token: &str) -> Result<Option<Profile>, AppError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT p.id, p.email, p.firstname, p.lastname, p.function, p.school,
                    p.is_active, p.is_staff
             FROM profiles p
             INNER JOIN auth_tokens t ON t.profile_id = p.id
             WHERE t.token = $1 AND p.is_active",
        )
        .bind(token)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error validating token");
            AppError::from(e)
        })?;

        Ok(profile)
    }

    #[instrument(skip(self), fields(profile.id = %profile_id, db.table = "auth_tokens"))]
    pub async fn revoke(&self, profile_id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM auth_tokens WHERE profile_id = $1")
            .bind(profile_id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error revoking token");
                AppError::from(e)
            })?;

        Ok(())
    }
}

pub struct AuthService;

impl AuthService {
    /// Checks credentials and returns the caller's token and school id.
    ///
    /// Unknown email, wrong password and inactive account all map to the same
    /// `Invalid Credentials` 404, so the response never reveals whether the
    /// email exists.
    #[instrument(skip_all, fields(db.table = "profiles"))]
    pub async fn login(
        db: &PgPool,
        tokens: &TokenStore,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, AppError> {
        let invalid = || AppError::not_found(anyhow::anyhow!("Invalid Credentials"));

        let credentials = sqlx::query_as::<_, Credentials>(
            "SELECT id, school, password, is_active FROM profiles WHERE email = $1",
        )
        .bind(username)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching credentials");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            debug!("Login attempt for unknown email");
            invalid()
        })?;

        if !credentials.is_active || !verify_password(password, &credentials.password)? {
            debug!(profile.id = %credentials.id, "Login rejected");
            return Err(invalid());
        }

        let token = tokens.issue(credentials.id).await?;

        info!(profile.id = %credentials.id, "Login succeeded");

        Ok(LoginResponse {
            token,
            school_id: credentials.school,
        })
    }
}
