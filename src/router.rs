use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::auth::router::init_auth_router;
use crate::modules::observations::router::init_observations_router;
use crate::modules::profiles::router::init_profiles_router;
use crate::modules::schools::router::init_schools_router;
use crate::modules::students::router::init_students_router;
use crate::modules::subscriptions::router::init_subscriptions_router;
use crate::modules::transfers::router::init_transfers_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(
            "/api",
            Router::new()
                .merge(init_auth_router())
                .nest("/profiles", init_profiles_router())
                .nest("/schools", init_schools_router())
                .nest("/students", init_students_router())
                .nest("/observations", init_observations_router())
                .nest("/subscriptions", init_subscriptions_router())
                .nest("/transfers", init_transfers_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
