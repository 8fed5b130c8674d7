use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login_user, logout_user};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_user))
        .route("/logout", post(logout_user))
}
