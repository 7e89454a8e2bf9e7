use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::error::{ApiError, FeedError};
use crate::middleware::auth::PartnerId;
use crate::models::order::{OrderStatusUpdateRequest, SimulatedOrder};
use crate::services::AppState;

/// Demo trigger: drop one fresh synthetic order into the open pool.
pub async fn simulate_order(State(state): State<Arc<AppState>>) -> StatusCode {
    state.feed.generate();
    StatusCode::OK
}

pub async fn pending_orders(State(state): State<Arc<AppState>>) -> Json<Vec<SimulatedOrder>> {
    Json(state.feed.pending_orders())
}

pub async fn accept_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Extension(partner): Extension<PartnerId>,
) -> Result<String, ApiError> {
    match state.feed.accept(&order_id, partner.0) {
        Ok(_) => Ok("Order accepted.".to_string()),
        Err(FeedError::NotFound) => Err(ApiError::BadRequest(
            "Order not found or already accepted.".to_string(),
        )),
        Err(err) => Err(err.into()),
    }
}

pub async fn reject_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Extension(partner): Extension<PartnerId>,
) -> Result<String, ApiError> {
    match state.feed.reject(&order_id, partner.0) {
        Ok(()) => Ok("Order rejected.".to_string()),
        Err(FeedError::NotFound) => Err(ApiError::BadRequest(
            "Order not found or already rejected.".to_string(),
        )),
        Err(err) => Err(err.into()),
    }
}

pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<Json<SimulatedOrder>, ApiError> {
    state
        .feed
        .order_by_id(&order_id)
        .map(Json)
        .map_err(|_| ApiError::NotFound("Order not found".to_string()))
}

pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Extension(partner): Extension<PartnerId>,
    Json(request): Json<OrderStatusUpdateRequest>,
) -> Result<String, ApiError> {
    // Not-active and not-owner surface identically to the caller; the
    // distinction only shows up in logs.
    state
        .feed
        .update_status(&order_id, &request.status, partner.0)
        .map(|_| format!("Order status updated to {}", request.status))
        .map_err(|_| ApiError::NotFound("Order not found or status update failed.".to_string()))
}

pub async fn delivery_history(
    State(state): State<Arc<AppState>>,
    Extension(partner): Extension<PartnerId>,
) -> Json<Vec<SimulatedOrder>> {
    Json(state.feed.history_for(partner.0))
}
