use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_subscription;

pub fn init_subscriptions_router() -> Router<AppState> {
    Router::new().route("/{school_id}", get(get_subscription))
}
