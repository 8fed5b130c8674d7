use axum::{Json, extract::Path, extract::State, http::StatusCode};

use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateProfileDto, Profile, UpdateProfileDto};
use super::service::ProfileService;

#[utoipa::path(
    get,
    path = "/api/profiles",
    responses(
        (status = 200, description = "All profiles", body = Vec<Profile>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profiles",
    security(("token" = []))
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Profile>>, AppError> {
    let profiles = ProfileService::get_all_profiles(&state.db).await?;
    Ok(Json(profiles))
}

#[utoipa::path(
    post,
    path = "/api/profiles",
    request_body = CreateProfileDto,
    responses(
        (status = 201, description = "Profile created", body = Profile),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profiles",
    security(("token" = []))
)]
pub async fn create_profile(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProfileDto>,
) -> Result<(StatusCode, Json<Profile>), AppError> {
    let profile = ProfileService::create_profile(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Profile found", body = Profile),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    tag = "Profiles",
    security(("token" = []))
)]
pub async fn get_profile(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Profile>, AppError> {
    let profile = ProfileService::get_profile_by_id(&state.db, id).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    tag = "Profiles",
    security(("token" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<Profile>, AppError> {
    let profile = ProfileService::update_profile(&state.db, id, dto).await?;
    Ok(Json(profile))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/{id}",
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found")
    ),
    tag = "Profiles",
    security(("token" = []))
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    ProfileService::delete_profile(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
