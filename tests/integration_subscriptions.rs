mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_school, create_test_subscription, read_json, setup_test_app};
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "./migrations")]
async fn test_get_subscription_requires_no_auth(pool: PgPool) {
    let school_id = create_test_school(&pool, "Subscribed School").await;
    create_test_subscription(&pool, school_id).await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/subscriptions/{}", school_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["id_school"], school_id);
    assert_eq!(body["type"], "premium");
    assert_eq!(body["price"], 499.0);
    assert_eq!(body["payed"], 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_subscription_is_bad_request_not_not_found(pool: PgPool) {
    let school_id = create_test_school(&pool, "Unsubscribed School").await;

    let app = setup_test_app(pool);
    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/subscriptions/{}", school_id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
