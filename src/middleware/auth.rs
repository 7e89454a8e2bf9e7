//! Bearer-token authentication for partner-scoped routes.
//!
//! Resolves the caller's partner id once per request and hands it to the
//! handlers as a typed extension; the core services never look at ambient
//! request context themselves.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ApiError;
use crate::services::AppState;

/// Verified identity of the calling delivery partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnerId(pub i64);

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

pub async fn require_partner(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    let claims = validate_token(token, &state.config.jwt_secret)
        .map_err(|_| ApiError::Unauthorized("Invalid token".to_string()))?;

    // The subject carries the partner's numeric id. A token with a
    // non-numeric subject is rejected here rather than deep in a handler.
    let partner_id: i64 = claims
        .sub
        .parse()
        .map_err(|_| ApiError::Unauthorized("Invalid delivery partner ID".to_string()))?;

    request.extensions_mut().insert(PartnerId(partner_id));
    Ok(next.run(request).await)
}

pub fn validate_token(token: &str, secret: &str) -> jsonwebtoken::errors::Result<Claims> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Issue a token for a partner id. Used by the demo login tooling and tests.
pub fn generate_token(
    partner_id: i64,
    secret: &str,
    expires_in: Duration,
) -> jsonwebtoken::errors::Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: partner_id.to_string(),
        exp: (now + expires_in).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
