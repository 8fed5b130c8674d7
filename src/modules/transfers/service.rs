use sqlx::PgPool;
use tracing::{error, info, instrument};

use crate::utils::errors::AppError;

use super::model::{CreateTransferDto, Transfer};

const TRANSFER_COLUMNS: &str =
    "id_transfer, id_student, from_school, to_school, demand_date, transfer_date, validation_to";

fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        // Name the offending column when Postgres reports the constraint.
        let field = match db_err.constraint() {
            Some(c) if c.contains("from_school") => "from_school",
            Some(c) if c.contains("to_school") => "to_school",
            _ => "id_student",
        };
        return AppError::field(field, "Referenced record does not exist");
    }
    error!(error = %e, "Database error writing transfer");
    AppError::from(e)
}

pub struct TransferService;

impl TransferService {
    #[instrument(skip(db), fields(db.table = "transfers"))]
    pub async fn get_all_transfers(db: &PgPool) -> Result<Vec<Transfer>, AppError> {
        let transfers = sqlx::query_as::<_, Transfer>(&format!(
            "SELECT {TRANSFER_COLUMNS} FROM transfers ORDER BY id_transfer"
        ))
        .fetch_all(db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error fetching transfers");
            AppError::from(e)
        })?;

        Ok(transfers)
    }

    #[instrument(skip(db, dto), fields(student.id = %dto.id_student, db.table = "transfers"))]
    pub async fn create_transfer(
        db: &PgPool,
        dto: CreateTransferDto,
    ) -> Result<Transfer, AppError> {
        let transfer = sqlx::query_as::<_, Transfer>(&format!(
            "INSERT INTO transfers (id_student, from_school, to_school, demand_date, transfer_date, validation_to)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {TRANSFER_COLUMNS}"
        ))
        .bind(dto.id_student)
        .bind(dto.from_school)
        .bind(dto.to_school)
        .bind(dto.demand_date)
        .bind(dto.transfer_date)
        .bind(dto.validation_to)
        .fetch_one(db)
        .await
        .map_err(map_write_error)?;

        info!(transfer.id = %transfer.id_transfer, "Transfer created");

        Ok(transfer)
    }
}
