use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Login request body.
///
/// Fields are optional so that a missing one can be reported with the exact
/// `Please provide both username and password` message instead of a generic
/// deserialization error. `username` carries the profile's email address.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub school_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: String,
}

/// Credential columns fetched at login; never serialized.
#[derive(Debug, FromRow)]
pub struct Credentials {
    pub id: i32,
    pub school: i32,
    pub password: String,
    pub is_active: bool,
}
