use dotenvy::dotenv;

use satchel::logging::init_tracing;
use satchel::router::init_router;
use satchel::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("🚀 Server running on http://localhost:3000");
    println!("📖 Scalar UI available at http://localhost:3000/scalar");
    axum::serve(listener, app).await.unwrap();
}
