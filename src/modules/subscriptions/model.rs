use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A school's billing record. By convention there is one per school, though
/// nothing enforces it; lookup is by `id_school` and read-only over the API.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Subscription {
    pub id: i32,
    pub id_school: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: Option<String>,
    pub price: Option<f64>,
    pub begin_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub payed: Option<i32>,
}
