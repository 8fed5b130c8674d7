mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_profile, create_test_school, generate_unique_email, get_auth_token, read_json,
    setup_test_app,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn authed_app_and_token(pool: &PgPool, school_id: i32) -> (axum::Router, String) {
    let email = generate_unique_email();
    create_test_profile(pool, &email, "testpass123", "admin", school_id).await;
    let app = setup_test_app(pool.clone());
    let token = get_auth_token(app.clone(), &email, "testpass123").await;
    (app, token)
}

fn json_request(method: &str, uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_profiles_requires_token(pool: PgPool) {
    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri("/api/profiles")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_profile_round_trips_without_password(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let email = generate_unique_email();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/profiles",
            &token,
            json!({
                "email": email,
                "firstname": "Ada",
                "lastname": "Lovelace",
                "function": "director",
                "school": school_id,
                "password": "secret123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["email"], email);
    assert_eq!(body["firstname"], "Ada");
    assert_eq!(body["lastname"], "Lovelace");
    assert_eq!(body["function"], "director");
    assert_eq!(body["school"], school_id);
    assert_eq!(body["is_active"], true);
    assert_eq!(body["is_staff"], false);
    assert!(body.get("password").is_none(), "password must not leak");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_profile_with_duplicate_email_fails(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let email = generate_unique_email();
    create_test_profile(&pool, &email, "pw", "user", school_id).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/profiles",
            &token,
            json!({
                "email": email,
                "firstname": "Dup",
                "lastname": "Licate",
                "function": "user",
                "school": school_id,
                "password": "secret123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert!(body["email"][0].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_profile_with_unknown_role_fails(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/profiles",
            &token,
            json!({
                "email": generate_unique_email(),
                "firstname": "Bad",
                "lastname": "Role",
                "function": "superuser",
                "school": school_id,
                "password": "secret123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_profile_with_dangling_school_fails(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/profiles",
            &token,
            json!({
                "email": generate_unique_email(),
                "firstname": "No",
                "lastname": "School",
                "function": "user",
                "school": 9999,
                "password": "secret123"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["school"][0], "School does not exist");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_unknown_profile_is_not_found(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/profiles/9999")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_profile_replaces_fields(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let email = generate_unique_email();
    let profile_id = create_test_profile(&pool, &email, "pw", "user", school_id).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/profiles/{}", profile_id),
            &token,
            json!({
                "email": email,
                "firstname": "Renamed",
                "lastname": "Profile",
                "function": "director",
                "school": school_id,
                "is_staff": true
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["firstname"], "Renamed");
    assert_eq!(body["function"], "director");
    assert_eq!(body["is_staff"], true);

    // Password was not in the body, so the old one still works.
    get_auth_token(app, &email, "pw").await;
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_profile_can_change_password(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let email = generate_unique_email();
    let profile_id = create_test_profile(&pool, &email, "oldpass", "user", school_id).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/profiles/{}", profile_id),
            &token,
            json!({
                "email": email,
                "firstname": "Test",
                "lastname": "Profile",
                "function": "user",
                "school": school_id,
                "password": "newpass"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    get_auth_token(app, &email, "newpass").await;
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_profile(pool: PgPool) {
    let school_id = create_test_school(&pool, "HQ").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let profile_id =
        create_test_profile(&pool, &generate_unique_email(), "pw", "user", school_id).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/profiles/{}", profile_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/profiles/{}", profile_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
