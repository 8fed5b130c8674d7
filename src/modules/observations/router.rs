use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_observation, delete_observation, get_observation, get_observations,
    update_observation,
};

pub fn init_observations_router() -> Router<AppState> {
    Router::new()
        .route(
            "/list/{id_student}",
            get(get_observations).post(create_observation),
        )
        .route(
            "/details/{id}",
            get(get_observation)
                .put(update_observation)
                .delete(delete_observation),
        )
}
