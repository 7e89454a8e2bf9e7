use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::middleware::auth::PartnerId;
use crate::models::feedback::{Feedback, FeedbackRequest};
use crate::services::AppState;

pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    Extension(partner): Extension<PartnerId>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<Feedback>, ApiError> {
    if request.order_id.trim().is_empty() {
        return Err(ApiError::BadRequest("Order ID is required.".to_string()));
    }

    if !(1..=5).contains(&request.rating) {
        return Err(ApiError::BadRequest(
            "Rating must be between 1 and 5.".to_string(),
        ));
    }

    Ok(Json(state.feedback.submit(request, partner.0)))
}
