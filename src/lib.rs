pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Simulation trigger and the pending feed are public; everything acting on
    // behalf of a specific partner goes through the auth layer.
    let protected = Router::new()
        .route("/api/orders/:id/accept", post(handlers::orders::accept_order))
        .route("/api/orders/:id/reject", post(handlers::orders::reject_order))
        .route("/api/orders/:id/status", post(handlers::orders::update_order_status))
        .route("/api/orders/history", get(handlers::orders::delivery_history))
        .route("/api/orders/:id", get(handlers::orders::get_order))
        .route("/api/feedback", post(handlers::feedback::submit_feedback))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_partner,
        ));

    Router::new()
        .route("/api/orders/simulate", post(handlers::orders::simulate_order))
        .route("/api/orders/pending", get(handlers::orders::pending_orders))
        .route("/health", get(handlers::health::health_check))
        .merge(protected)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
