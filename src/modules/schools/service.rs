use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

use crate::utils::errors::AppError;

use super::model::School;

const SCHOOL_COLUMNS: &str = "id, name, address, nbr_students, email, mode";

pub struct SchoolService;

impl SchoolService {
    #[instrument(skip(db), fields(db.table = "schools"))]
    pub async fn get_all_schools(db: &PgPool) -> Result<Vec<School>, AppError> {
        let schools = sqlx::query_as::<_, School>(&format!(
            "SELECT {SCHOOL_COLUMNS} FROM schools ORDER BY id"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching schools");
            AppError::from(e)
        })?;

        Ok(schools)
    }

    #[instrument(skip(db), fields(school.id = %id, db.table = "schools"))]
    pub async fn get_school_by_id(db: &PgPool, id: i32) -> Result<School, AppError> {
        sqlx::query_as::<_, School>(&format!(
            "SELECT {SCHOOL_COLUMNS} FROM schools WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching school");
            AppError::from(e)
        })?
        .ok_or_else(|| {
            debug!(school.id = %id, "School not found");
            AppError::not_found(anyhow::anyhow!("School not found"))
        })
    }

    /// Flips the school's `mode` flag, touching only that column.
    #[instrument(skip(db), fields(school.id = %id, db.table = "schools"))]
    pub async fn toggle_mode(db: &PgPool, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE schools SET mode = NOT mode WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error toggling school mode");
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("School not found")));
        }

        info!(school.id = %id, "School mode toggled");

        Ok(())
    }

    /// Mode flag of the given school, for the observation-detail gate.
    #[instrument(skip(db), fields(school.id = %id, db.table = "schools"))]
    pub async fn get_mode(db: &PgPool, id: i32) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, bool>("SELECT mode FROM schools WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error fetching school mode");
                AppError::from(e)
            })?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("School not found")))
    }
}
