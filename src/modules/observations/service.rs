use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

use crate::middleware::auth::AuthUser;
use crate::modules::profiles::model::Role;
use crate::modules::schools::service::SchoolService;
use crate::utils::errors::AppError;

use super::model::{Observation, ObservationDto};

const OBSERVATION_COLUMNS: &str = "id, id_student, observation, teacher, action, date, time";

fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::field("id_student", "Student does not exist");
    }
    error!(error = %e, "Database error writing observation");
    AppError::from(e)
}

pub struct ObservationService;

impl ObservationService {
    /// Detail-access gate: while the caller's own school has `mode` set,
    /// `user`-role profiles are locked out of observation details.
    ///
    /// The flag checked belongs to the caller's school, not to the school of
    /// the student the observation is about.
    #[instrument(skip(db, auth_user), fields(profile.id = %auth_user.0.id))]
    pub async fn check_detail_access(db: &PgPool, auth_user: &AuthUser) -> Result<(), AppError> {
        if auth_user.role() != Role::User {
            return Ok(());
        }

        let mode = SchoolService::get_mode(db, auth_user.school_id()).await?;
        if mode {
            warn!(
                profile.id = %auth_user.0.id,
                school.id = %auth_user.school_id(),
                "Observation detail denied: school is in restricted mode"
            );
            return Err(AppError::unauthorized(anyhow::anyhow!(
                "Observation details are restricted while your school is in restricted mode"
            )));
        }

        Ok(())
    }

    #[instrument(skip(db), fields(student.id = %id_student, db.table = "observations"))]
    pub async fn get_observations_by_student(
        db: &PgPool,
        id_student: i32,
    ) -> Result<Vec<Observation>, AppError> {
        let observations = sqlx::query_as::<_, Observation>(&format!(
            "SELECT {OBSERVATION_COLUMNS} FROM observations WHERE id_student = $1 ORDER BY id"
        ))
        .bind(id_student)
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching observations");
            AppError::from(e)
        })?;

        Ok(observations)
    }

    #[instrument(skip(db, dto), fields(student.id = %dto.id_student, db.table = "observations"))]
    pub async fn create_observation(
        db: &PgPool,
        dto: ObservationDto,
    ) -> Result<Observation, AppError> {
        let observation = sqlx::query_as::<_, Observation>(&format!(
            "INSERT INTO observations (id_student, observation, teacher, action, date, time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {OBSERVATION_COLUMNS}"
        ))
        .bind(dto.id_student)
        .bind(&dto.observation)
        .bind(&dto.teacher)
        .bind(&dto.action)
        .bind(dto.date)
        .bind(dto.time)
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        info!(observation.id = %observation.id, "Observation created");

        Ok(observation)
    }

    #[instrument(skip(db), fields(observation.id = %id, db.table = "observations"))]
    pub async fn get_observation_by_id(db: &PgPool, id: i32) -> Result<Observation, AppError> {
        sqlx::query_as::<_, Observation>(&format!(
            "SELECT {OBSERVATION_COLUMNS} FROM observations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching observation");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            debug!(observation.id = %id, "Observation not found");
            AppError::not_found(anyhow::anyhow!("Observation not found"))
        })
    }

    #[instrument(skip(db, dto), fields(observation.id = %id, db.table = "observations"))]
    pub async fn update_observation(
        db: &PgPool,
        id: i32,
        dto: ObservationDto,
    ) -> Result<Observation, AppError> {
        let observation = sqlx::query_as::<_, Observation>(&format!(
            "UPDATE observations
             SET id_student = $1, observation = $2, teacher = $3, action = $4, date = $5, time = $6
             WHERE id = $7
             RETURNING {OBSERVATION_COLUMNS}"
        ))
        .bind(dto.id_student)
        .bind(&dto.observation)
        .bind(&dto.teacher)
        .bind(&dto.action)
        .bind(dto.date)
        .bind(dto.time)
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(map_write_error)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Observation not found")))?;

        info!(observation.id = %observation.id, "Observation updated");

        Ok(observation)
    }

    #[instrument(skip(db), fields(observation.id = %id, db.table = "observations"))]
    pub async fn delete_observation(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM observations WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error deleting observation");
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Observation not found"
            )));
        }

        info!(observation.id = %id, "Observation deleted");

        Ok(())
    }
}
