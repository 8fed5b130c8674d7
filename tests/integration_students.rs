mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_profile, create_test_school, create_test_student, generate_unique_email,
    get_auth_token, read_json, setup_test_app,
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
async fn test_list_students_requires_token(pool: PgPool) {
    let school_id = create_test_school(&pool, "No Auth High").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/students/list/{}", school_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_students_filters_by_school(pool: PgPool) {
    let school_a = create_test_school(&pool, "A").await;
    let school_b = create_test_school(&pool, "B").await;
    create_test_student(&pool, school_a).await;
    create_test_student(&pool, school_a).await;
    create_test_student(&pool, school_b).await;

    let (app, token) = authed_app_and_token(&pool, school_a).await;

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/students/list/{}", school_a))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 2);
    assert!(students.iter().all(|s| s["school_id"] == school_a));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_round_trips(pool: PgPool) {
    let school_id = create_test_school(&pool, "Create High").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/students/list/{}", school_id),
            &token,
            json!({
                "name": "Curie",
                "firstname": "Marie",
                "age": 11,
                "school_id": school_id,
                "class": "5A"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["name"], "Curie");
    assert_eq!(body["firstname"], "Marie");
    assert_eq!(body["age"], 11);
    assert_eq!(body["school_id"], school_id);
    assert_eq!(body["class"], "5A");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_school_comes_from_body(pool: PgPool) {
    let path_school = create_test_school(&pool, "Path School").await;
    let body_school = create_test_school(&pool, "Body School").await;
    let (app, token) = authed_app_and_token(&pool, path_school).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/students/list/{}", path_school),
            &token,
            json!({ "school_id": body_school }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["school_id"], body_school);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_with_dangling_school_fails(pool: PgPool) {
    let school_id = create_test_school(&pool, "Real School").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/students/list/{}", school_id),
            &token,
            json!({ "school_id": 9999 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["school_id"][0], "School does not exist");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_student_with_overlong_class_fails(pool: PgPool) {
    let school_id = create_test_school(&pool, "Strict School").await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/students/list/{}", school_id),
            &token,
            json!({
                "school_id": school_id,
                "class": "much-too-long-for-a-class"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert!(body["class"][0].as_str().unwrap().contains("at most 10"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_student_full_replace(pool: PgPool) {
    let school_id = create_test_school(&pool, "Update High").await;
    let student_id = create_test_student(&pool, school_id).await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/students/details/{}", student_id),
            &token,
            json!({
                "name": "Renamed",
                "school_id": school_id
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["name"], "Renamed");
    // Full replace: fields absent from the body are cleared.
    assert_eq!(body["firstname"], serde_json::Value::Null);
    assert_eq!(body["age"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_student_then_detail_is_not_found(pool: PgPool) {
    let school_id = create_test_school(&pool, "Delete High").await;
    let student_id = create_test_student(&pool, school_id).await;
    let (app, token) = authed_app_and_token(&pool, school_id).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/students/details/{}", student_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/students/details/{}", student_id))
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
