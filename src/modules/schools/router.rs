use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{change_mode, get_all_schools, get_school};

pub fn init_schools_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_schools))
        .route("/changeMode/{id}", get(change_mode))
        .route("/{id}", get(get_school))
}
