use axum::body::Body;
use axum::http::Request;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use satchel::config::cors::CorsConfig;
use satchel::modules::auth::service::TokenStore;
use satchel::router::init_router;
use satchel::state::AppState;
use satchel::utils::password::hash_password;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        tokens: TokenStore::new(pool.clone()),
        db: pool,
        cors_config: CorsConfig::default(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_school_name() -> String {
    format!("Test School {}", Uuid::new_v4())
}

pub async fn create_test_school(pool: &PgPool, name: &str) -> i32 {
    create_test_school_with_mode(pool, name, false).await
}

pub async fn create_test_school_with_mode(pool: &PgPool, name: &str, mode: bool) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO schools (name, address, mode) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind("Test Address")
    .bind(mode)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a profile with a bcrypt-hashed password.
/// `role` is one of `admin`, `director`, `user`.
#[allow(dead_code)]
pub async fn create_test_profile(
    pool: &PgPool,
    email: &str,
    password: &str,
    role: &str,
    school_id: i32,
) -> i32 {
    let hashed = hash_password(password).unwrap();

    sqlx::query_scalar::<_, i32>(
        "INSERT INTO profiles (email, firstname, lastname, function, school, password)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(email)
    .bind("Test")
    .bind("Profile")
    .bind(role)
    .bind(school_id)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_student(pool: &PgPool, school_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO students (name, firstname, age, school_id, class)
         VALUES ('Doe', 'Jane', 10, $1, '4B')
         RETURNING id",
    )
    .bind(school_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_observation(pool: &PgPool, student_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO observations (id_student, observation, teacher)
         VALUES ($1, 'Talks during class', 'Mr. Test')
         RETURNING id",
    )
    .bind(student_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_subscription(pool: &PgPool, school_id: i32) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO subscriptions (id_school, type, price, payed)
         VALUES ($1, 'premium', 499.0, 1)
         RETURNING id",
    )
    .bind(school_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Logs in through the API and returns the issued token.
#[allow(dead_code)]
pub async fn get_auth_token(app: axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&serde_json::json!({
                "username": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["token"].as_str().unwrap().to_string()
}

/// Collects a response body as JSON.
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
