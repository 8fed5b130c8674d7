use axum::{
    Router,
    routing::get,
};

use crate::state::AppState;

use super::controller::{
    create_profile, delete_profile, get_profile, get_profiles, update_profile,
};

pub fn init_profiles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profiles).post(create_profile))
        .route(
            "/{id}",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}
