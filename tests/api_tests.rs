//! Integration tests exercising the HTTP surface end to end against the real
//! router, with JWT auth in the loop.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Duration;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use dispatch_feed::config::Config;
use dispatch_feed::middleware::auth::{generate_token, Claims};
use dispatch_feed::services::AppState;

const SECRET: &str = "test-secret";

fn test_app() -> Router {
    let config = Config {
        port: 0,
        jwt_secret: SECRET.to_string(),
    };
    dispatch_feed::create_router(Arc::new(AppState::new(config)))
}

fn bearer(partner_id: i64) -> String {
    let token = generate_token(partner_id, SECRET, Duration::hours(1)).unwrap();
    format!("Bearer {}", token)
}

fn post(path: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(path);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(path: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(path: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app();
    let response = app.oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn simulate_then_pending_shows_one_order() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post("/api/orders/simulate", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/orders/pending", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["status"], "PENDING");
    assert!(orders[0]["deliveryPartnerId"].is_null());
    assert!(orders[0]["id"].is_string());
}

#[tokio::test]
async fn accept_requires_auth() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post("/api/orders/some-id/accept", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(post("/api/orders/some-id/accept", Some("Bearer garbage")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_with_non_numeric_subject_is_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: "not-a-number".to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();

    let app = test_app();
    let response = app
        .oneshot(post(
            "/api/orders/some-id/accept",
            Some(&format!("Bearer {}", token)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_delivery_lifecycle() {
    let app = test_app();
    let partner_a = bearer(7);
    let partner_b = bearer(8);

    // One synthetic order in the feed.
    app.clone()
        .oneshot(post("/api/orders/simulate", None))
        .await
        .unwrap();
    let body = json_body(
        app.clone()
            .oneshot(get("/api/orders/pending", None))
            .await
            .unwrap(),
    )
    .await;
    let order_id = body[0]["id"].as_str().unwrap().to_string();

    // Partner A claims it.
    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/orders/{}/accept", order_id),
            Some(&partner_a),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Pool drains; the order is visible as ACCEPTED with partner A.
    let body = json_body(
        app.clone()
            .oneshot(get("/api/orders/pending", None))
            .await
            .unwrap(),
    )
    .await;
    assert!(body.as_array().unwrap().is_empty());

    let body = json_body(
        app.clone()
            .oneshot(get(&format!("/api/orders/{}", order_id), Some(&partner_a)))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(body["status"], "ACCEPTED");
    assert_eq!(body["deliveryPartnerId"], 7);

    // Partner B lost the race.
    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/orders/{}/accept", order_id),
            Some(&partner_b),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Partner B cannot advance A's order either.
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/orders/{}/status", order_id),
            Some(&partner_b),
            serde_json::json!({"status": "PICKED_UP"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Partner A delivers.
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/api/orders/{}/status", order_id),
            Some(&partner_a),
            serde_json::json!({"status": "DELIVERED"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Archived: in A's history, gone from lookup.
    let body = json_body(
        app.clone()
            .oneshot(get("/api/orders/history", Some(&partner_a)))
            .await
            .unwrap(),
    )
    .await;
    let history = body.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["id"], order_id.as_str());

    let response = app
        .oneshot(get(&format!("/api/orders/{}", order_id), Some(&partner_a)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejected_order_vanishes() {
    let app = test_app();
    let auth = bearer(3);

    app.clone()
        .oneshot(post("/api/orders/simulate", None))
        .await
        .unwrap();
    let body = json_body(
        app.clone()
            .oneshot(get("/api/orders/pending", None))
            .await
            .unwrap(),
    )
    .await;
    let order_id = body[0]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/orders/{}/reject", order_id),
            Some(&auth),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(
        app.clone()
            .oneshot(get("/api/orders/pending", None))
            .await
            .unwrap(),
    )
    .await;
    assert!(body.as_array().unwrap().is_empty());

    let response = app
        .clone()
        .oneshot(get(&format!("/api/orders/{}", order_id), Some(&auth)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Rejecting again reports the miss as a bad request.
    let response = app
        .oneshot(post(
            &format!("/api/orders/{}/reject", order_id),
            Some(&auth),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_unknown_order_is_404_not_a_fault() {
    let app = test_app();
    let response = app
        .oneshot(get("/api/orders/nope", Some(&bearer(1))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["error"], "Order not found");
}

#[tokio::test]
async fn history_requires_auth() {
    let app = test_app();
    let response = app
        .oneshot(get("/api/orders/history", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn feedback_validates_rating_bounds() {
    let app = test_app();
    let auth = bearer(5);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/feedback",
            Some(&auth),
            serde_json::json!({"orderId": "o-1", "rating": 6}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/feedback",
            Some(&auth),
            serde_json::json!({"orderId": "  ", "rating": 4}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(post_json(
            "/api/feedback",
            Some(&auth),
            serde_json::json!({"orderId": "o-1", "rating": 4, "comments": "on time"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["rating"], 4);
    assert_eq!(body["deliveryPartnerId"], 5);
    assert_eq!(body["feedback"], "on time");
}
