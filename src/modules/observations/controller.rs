use axum::{Json, extract::Path, extract::State, http::StatusCode};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{Observation, ObservationDto};
use super::service::ObservationService;

#[utoipa::path(
    get,
    path = "/api/observations/list/{id_student}",
    params(("id_student" = i32, Path, description = "Student ID to filter by")),
    responses(
        (status = 200, description = "Observations for the student", body = Vec<Observation>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Observations",
    security(("token" = []))
)]
pub async fn get_observations(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id_student): Path<i32>,
) -> Result<Json<Vec<Observation>>, AppError> {
    let observations =
        ObservationService::get_observations_by_student(&state.db, id_student).await?;
    Ok(Json(observations))
}

#[utoipa::path(
    post,
    path = "/api/observations/list/{id_student}",
    params(("id_student" = i32, Path, description = "Unused; the student comes from the body")),
    request_body = ObservationDto,
    responses(
        (status = 201, description = "Observation created", body = Observation),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Observations",
    security(("token" = []))
)]
pub async fn create_observation(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(_id_student): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ObservationDto>,
) -> Result<(StatusCode, Json<Observation>), AppError> {
    let observation = ObservationService::create_observation(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(observation)))
}

#[utoipa::path(
    get,
    path = "/api/observations/details/{id}",
    params(("id" = i32, Path, description = "Observation ID")),
    responses(
        (status = 200, description = "Observation found", body = Observation),
        (status = 401, description = "Unauthorized or mode-gated"),
        (status = 404, description = "Observation not found")
    ),
    tag = "Observations",
    security(("token" = []))
)]
pub async fn get_observation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Observation>, AppError> {
    let observation = ObservationService::get_observation_by_id(&state.db, id).await?;
    ObservationService::check_detail_access(&state.db, &auth_user).await?;
    Ok(Json(observation))
}

#[utoipa::path(
    put,
    path = "/api/observations/details/{id}",
    params(("id" = i32, Path, description = "Observation ID")),
    request_body = ObservationDto,
    responses(
        (status = 200, description = "Observation updated", body = Observation),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized or mode-gated"),
        (status = 404, description = "Observation not found")
    ),
    tag = "Observations",
    security(("token" = []))
)]
pub async fn update_observation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<ObservationDto>,
) -> Result<Json<Observation>, AppError> {
    ObservationService::get_observation_by_id(&state.db, id).await?;
    ObservationService::check_detail_access(&state.db, &auth_user).await?;

    let observation = ObservationService::update_observation(&state.db, id, dto).await?;
    Ok(Json(observation))
}

#[utoipa::path(
    delete,
    path = "/api/observations/details/{id}",
    params(("id" = i32, Path, description = "Observation ID")),
    responses(
        (status = 204, description = "Observation deleted"),
        (status = 401, description = "Unauthorized or mode-gated"),
        (status = 404, description = "Observation not found")
    ),
    tag = "Observations",
    security(("token" = []))
)]
pub async fn delete_observation(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    ObservationService::get_observation_by_id(&state.db, id).await?;
    ObservationService::check_detail_access(&state.db, &auth_user).await?;

    ObservationService::delete_observation(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
