use axum::{Json, extract::Path, extract::State, http::StatusCode};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::School;
use super::service::SchoolService;

#[utoipa::path(
    get,
    path = "/api/schools",
    responses(
        (status = 200, description = "All schools", body = Vec<School>)
    ),
    tag = "Schools"
)]
pub async fn get_all_schools(
    State(state): State<AppState>,
) -> Result<Json<Vec<School>>, AppError> {
    let schools = SchoolService::get_all_schools(&state.db).await?;
    Ok(Json(schools))
}

#[utoipa::path(
    get,
    path = "/api/schools/{id}",
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 200, description = "School found", body = School),
        (status = 404, description = "School not found")
    ),
    tag = "Schools"
)]
pub async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<School>, AppError> {
    let school = SchoolService::get_school_by_id(&state.db, id).await?;
    Ok(Json(school))
}

/// Toggle of the school's `mode` flag. Existence is checked before the role
/// gate, so an unknown id is a 404 even for callers who could not toggle it.
#[utoipa::path(
    get,
    path = "/api/schools/changeMode/{id}",
    params(("id" = i32, Path, description = "School ID")),
    responses(
        (status = 202, description = "Mode toggled"),
        (status = 401, description = "Caller is not admin or director"),
        (status = 404, description = "School not found")
    ),
    tag = "Schools",
    security(("token" = []))
)]
pub async fn change_mode(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    SchoolService::get_school_by_id(&state.db, id).await?;

    if !auth_user.role().can_change_mode() {
        return Err(AppError::unauthorized(anyhow::anyhow!(
            "Only admins and directors can change a school's mode"
        )));
    }

    SchoolService::toggle_mode(&state.db, id).await?;
    Ok(StatusCode::ACCEPTED)
}
