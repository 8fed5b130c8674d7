mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_school, create_test_student, read_json, setup_test_app};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn post_transfer(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/transfers")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_list_transfers_without_auth(pool: PgPool) {
    let from = create_test_school(&pool, "From School").await;
    let to = create_test_school(&pool, "To School").await;
    let student = create_test_student(&pool, from).await;

    let app = setup_test_app(pool);

    let response = app
        .clone()
        .oneshot(post_transfer(json!({
            "id_student": student,
            "from_school": from,
            "to_school": to,
            "demand_date": "2026-03-01",
            "transfer_date": "2026-03-15",
            "validation_to": 1
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = read_json(response).await;
    assert_eq!(body["id_student"], student);
    assert_eq!(body["from_school"], from);
    assert_eq!(body["to_school"], to);
    assert_eq!(body["demand_date"], "2026-03-01");
    assert_eq!(body["transfer_date"], "2026-03-15");
    assert_eq!(body["validation_to"], 1);

    let request = Request::builder()
        .method("GET")
        .uri("/api/transfers")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_transfer_with_dangling_student_fails(pool: PgPool) {
    let from = create_test_school(&pool, "From School").await;
    let to = create_test_school(&pool, "To School").await;

    let app = setup_test_app(pool);
    let response = app
        .oneshot(post_transfer(json!({
            "id_student": 9999,
            "from_school": from,
            "to_school": to
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["id_student"][0], "Referenced record does not exist");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_transfer_missing_required_field_fails(pool: PgPool) {
    let from = create_test_school(&pool, "From School").await;
    let student = create_test_student(&pool, from).await;

    let app = setup_test_app(pool);
    let response = app
        .oneshot(post_transfer(json!({
            "id_student": student,
            "from_school": from
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["to_school"][0], "to_school is required");
}
