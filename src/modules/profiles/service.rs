use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

use super::model::{CreateProfileDto, Profile, UpdateProfileDto};

const PROFILE_COLUMNS: &str = "id, email, firstname, lastname, function, school, is_active, is_staff";

fn map_insert_error(e: sqlx::Error, email: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            warn!(profile.email = %email, "Attempted to create profile with existing email");
            return AppError::field("email", "A profile with this email already exists");
        }
        if db_err.is_foreign_key_violation() {
            return AppError::field("school", "School does not exist");
        }
    }
    error!(error = %e, "Database error writing profile");
    AppError::from(e)
}

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(db), fields(db.table = "profiles"))]
    pub async fn get_all_profiles(db: &PgPool) -> Result<Vec<Profile>, AppError> {
        let profiles = sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY id"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching profiles");
            AppError::from(e)
        })?;

        Ok(profiles)
    }

    #[instrument(skip(db, dto), fields(profile.email = %dto.email, db.table = "profiles"))]
    pub async fn create_profile(db: &PgPool, dto: CreateProfileDto) -> Result<Profile, AppError> {
        debug!(profile.function = %dto.function, profile.school = %dto.school, "Creating profile");

        let password_hash = hash_password(&dto.password)?;

        let profile = sqlx::query_as::<_, Profile>(&format!(
            "INSERT INTO profiles (email, firstname, lastname, function, school, is_active, is_staff, password)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&dto.firstname)
        .bind(&dto.lastname)
        .bind(dto.function)
        .bind(dto.school)
        .bind(dto.is_active)
        .bind(dto.is_staff)
        .bind(&password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| map_insert_error(e, &dto.email))?;

        info!(profile.id = %profile.id, "Profile created");

        Ok(profile)
    }

    #[instrument(skip(db), fields(profile.id = %id, db.table = "profiles"))]
    pub async fn get_profile_by_id(db: &PgPool, id: i32) -> Result<Profile, AppError> {
        sqlx::query_as::<_, Profile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching profile");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            debug!(profile.id = %id, "Profile not found");
            AppError::not_found(anyhow::anyhow!("Profile not found"))
        })
    }

    /// Full-replace update. The stored password hash is kept unless the DTO
    /// carries a new password.
    #[instrument(skip(db, dto), fields(profile.id = %id, db.table = "profiles"))]
    pub async fn update_profile(
        db: &PgPool,
        id: i32,
        dto: UpdateProfileDto,
    ) -> Result<Profile, AppError> {
        let password_hash = match &dto.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let profile = sqlx::query_as::<_, Profile>(&format!(
            "UPDATE profiles
             SET email = $1, firstname = $2, lastname = $3, function = $4, school = $5,
                 is_active = $6, is_staff = $7, password = COALESCE($8, password)
             WHERE id = $9
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(&dto.email)
        .bind(&dto.firstname)
        .bind(&dto.lastname)
        .bind(dto.function)
        .bind(dto.school)
        .bind(dto.is_active)
        .bind(dto.is_staff)
        .bind(password_hash)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| map_insert_error(e, &dto.email))?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Profile not found")))?;

        info!(profile.id = %profile.id, "Profile updated");

        Ok(profile)
    }

    #[instrument(skip(db), fields(profile.id = %id, db.table = "profiles"))]
    pub async fn delete_profile(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error deleting profile");
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Profile not found")));
        }

        info!(profile.id = %id, "Profile deleted");

        Ok(())
    }
}
