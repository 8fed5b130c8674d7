use axum::{Json, extract::State, http::StatusCode};

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateTransferDto, Transfer};
use super::service::TransferService;

#[utoipa::path(
    get,
    path = "/api/transfers",
    responses(
        (status = 200, description = "All transfers", body = Vec<Transfer>)
    ),
    tag = "Transfers"
)]
pub async fn get_transfers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transfer>>, AppError> {
    let transfers = TransferService::get_all_transfers(&state.db).await?;
    Ok(Json(transfers))
}

#[utoipa::path(
    post,
    path = "/api/transfers",
    request_body = CreateTransferDto,
    responses(
        (status = 201, description = "Transfer created", body = Transfer),
        (status = 400, description = "Validation error")
    ),
    tag = "Transfers"
)]
pub async fn create_transfer(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTransferDto>,
) -> Result<(StatusCode, Json<Transfer>), AppError> {
    let transfer = TransferService::create_transfer(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(transfer)))
}
