//! Profile data models and DTOs.
//!
//! A profile is a staff account attached to a school. The `function` column
//! is a closed role set ([`Role`]); the `school` column is a real foreign key
//! to `schools` without a cascade, so a school with profiles attached cannot
//! be deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Role of a profile, stored lowercase in the `function` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Director,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Director => "director",
            Role::User => "user",
        }
    }

    /// Whether this role may toggle a school's `mode` flag.
    pub fn can_change_mode(&self) -> bool {
        matches!(self, Role::Admin | Role::Director)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "director" => Ok(Role::Director),
            "user" => Ok(Role::User),
            other => Err(anyhow::anyhow!("Unknown role: {}", other)),
        }
    }
}

impl sqlx::Type<sqlx::Postgres> for Role {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Role {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(s.parse()?)
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for Role {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

/// A profile as stored in the database, minus the password hash.
///
/// The hash never leaves the service layer; responses are built from this
/// struct, so there is nothing to redact at serialization time.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Profile {
    pub id: i32,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub function: Role,
    pub school: i32,
    pub is_active: bool,
    pub is_staff: bool,
}

fn default_is_active() -> bool {
    true
}

/// DTO for creating a profile.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateProfileDto {
    #[validate(email(message = "email is not a valid email address"))]
    #[validate(length(max = 255, message = "email is too long"))]
    pub email: String,
    #[validate(length(min = 1, max = 255, message = "firstname must be 1-255 characters"))]
    pub firstname: String,
    #[validate(length(min = 1, max = 255, message = "lastname must be 1-255 characters"))]
    pub lastname: String,
    pub function: Role,
    pub school: i32,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// DTO for a full-replace update of a profile.
///
/// `password` is optional; when present the stored hash is replaced.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateProfileDto {
    #[validate(email(message = "email is not a valid email address"))]
    #[validate(length(max = 255, message = "email is too long"))]
    pub email: String,
    #[validate(length(min = 1, max = 255, message = "firstname must be 1-255 characters"))]
    pub firstname: String,
    #[validate(length(min = 1, max = 255, message = "lastname must be 1-255 characters"))]
    pub lastname: String,
    pub function: Role,
    pub school: i32,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("Director".parse::<Role>().unwrap(), Role::Director);
        assert_eq!("user".parse::<Role>().unwrap(), Role::User);
        assert!("teacher".parse::<Role>().is_err());
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Admin, Role::Director, Role::User] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn only_admin_and_director_can_change_mode() {
        assert!(Role::Admin.can_change_mode());
        assert!(Role::Director.can_change_mode());
        assert!(!Role::User.can_change_mode());
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }
}
