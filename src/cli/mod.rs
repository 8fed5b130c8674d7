//! Administrative commands used by the `satchel-cli` binary.
//!
//! Schools cannot be created over the API and neither can the first admin
//! profile (every create endpoint requires a token), so both enter the
//! system here.

pub mod seeder;

use anyhow::{Context, anyhow};
use sqlx::PgPool;

use crate::modules::profiles::model::Role;
use crate::utils::password::hash_password;

/// Inserts a school and returns its id.
pub async fn create_school(
    db: &PgPool,
    name: &str,
    address: Option<&str>,
    email: Option<&str>,
) -> anyhow::Result<i32> {
    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO schools (name, address, email) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(address)
    .bind(email)
    .fetch_one(db)
    .await
    .context("Failed to insert school")?;

    Ok(id)
}

/// Inserts an admin profile for an existing school.
pub async fn create_admin(
    db: &PgPool,
    firstname: &str,
    lastname: &str,
    email: &str,
    school_id: i32,
    password: &str,
) -> anyhow::Result<i32> {
    let password_hash =
        hash_password(password).map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;

    let id = sqlx::query_scalar::<_, i32>(
        "INSERT INTO profiles (email, firstname, lastname, function, school, is_staff, password)
         VALUES ($1, $2, $3, $4, $5, TRUE, $6)
         RETURNING id",
    )
    .bind(email)
    .bind(firstname)
    .bind(lastname)
    .bind(Role::Admin)
    .bind(school_id)
    .bind(&password_hash)
    .fetch_one(db)
    .await
    .context("Failed to insert admin profile (does the school exist, is the email unused?)")?;

    Ok(id)
}
