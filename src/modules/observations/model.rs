use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A dated behavioral note about a student, with an optional follow-up
/// action. Deleted together with the student.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Observation {
    pub id: i32,
    pub id_student: i32,
    pub observation: Option<String>,
    pub teacher: Option<String>,
    pub action: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

/// Create/full-replace DTO for an observation.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct ObservationDto {
    pub id_student: i32,
    pub observation: Option<String>,
    #[validate(length(max = 50, message = "teacher must be at most 50 characters"))]
    pub teacher: Option<String>,
    pub action: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}
