use axum::{Json, extract::Path, extract::State, http::StatusCode};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Student, StudentDto};
use super::service::StudentService;

#[utoipa::path(
    get,
    path = "/api/students/list/{school_id}",
    params(("school_id" = i32, Path, description = "School ID to filter by")),
    responses(
        (status = 200, description = "Students of the school", body = Vec<Student>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Students",
    security(("token" = []))
)]
pub async fn get_students(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(school_id): Path<i32>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::get_students_by_school(&state.db, school_id).await?;
    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/api/students/list/{school_id}",
    params(("school_id" = i32, Path, description = "Unused; the school comes from the body")),
    request_body = StudentDto,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Students",
    security(("token" = []))
)]
pub async fn create_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(_school_id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<StudentDto>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let student = StudentService::create_student(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

#[utoipa::path(
    get,
    path = "/api/students/details/{id}",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("token" = []))
)]
pub async fn get_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_student_by_id(&state.db, id).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/details/{id}",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = StudentDto,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("token" = []))
)]
pub async fn update_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<StudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::update_student(&state.db, id, dto).await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/details/{id}",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 204, description = "Student deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Student not found")
    ),
    tag = "Students",
    security(("token" = []))
)]
pub async fn delete_student(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    StudentService::delete_student(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
