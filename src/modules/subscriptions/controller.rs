use axum::{Json, extract::Path, extract::State};

use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::Subscription;
use super::service::SubscriptionService;

#[utoipa::path(
    get,
    path = "/api/subscriptions/{school_id}",
    params(("school_id" = i32, Path, description = "School ID")),
    responses(
        (status = 200, description = "Subscription for the school", body = Subscription),
        (status = 400, description = "School has no subscription")
    ),
    tag = "Subscriptions"
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    Path(school_id): Path<i32>,
) -> Result<Json<Subscription>, AppError> {
    let subscription =
        SubscriptionService::get_subscription_by_school(&state.db, school_id).await?;
    Ok(Json(subscription))
}
