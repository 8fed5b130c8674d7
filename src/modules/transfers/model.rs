use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student's move between two schools. `validation_to` is the destination
/// school's sign-off, recorded as an integer flag.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Transfer {
    pub id_transfer: i32,
    pub id_student: i32,
    pub from_school: i32,
    pub to_school: i32,
    pub demand_date: Option<NaiveDate>,
    pub transfer_date: Option<NaiveDate>,
    pub validation_to: Option<i32>,
}

/// Create DTO for a transfer.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateTransferDto {
    pub id_student: i32,
    pub from_school: i32,
    pub to_school: i32,
    pub demand_date: Option<NaiveDate>,
    pub transfer_date: Option<NaiveDate>,
    pub validation_to: Option<i32>,
}
