use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_transfer, get_transfers};

pub fn init_transfers_router() -> Router<AppState> {
    Router::new().route("/", get(get_transfers).post(create_transfer))
}
