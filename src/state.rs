use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::modules::auth::service::TokenStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub tokens: TokenStore,
    pub cors_config: CorsConfig,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;

    AppState {
        tokens: TokenStore::new(db.clone()),
        db,
        cors_config: CorsConfig::from_env(),
    }
}
