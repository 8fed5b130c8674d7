use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A student enrolled at a school. Deleted together with the school.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Student {
    pub id: i32,
    pub name: Option<String>,
    pub firstname: Option<String>,
    pub age: Option<i32>,
    pub school_id: i32,
    pub class: Option<String>,
}

/// Create/full-replace DTO for a student.
///
/// `school_id` comes from the body on create; the list path parameter is
/// only a read filter.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct StudentDto {
    #[validate(length(max = 50, message = "name must be at most 50 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 50, message = "firstname must be at most 50 characters"))]
    pub firstname: Option<String>,
    pub age: Option<i32>,
    pub school_id: i32,
    #[validate(length(max = 10, message = "class must be at most 10 characters"))]
    pub class: Option<String>,
}
