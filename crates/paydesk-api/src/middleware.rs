use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};

use paydesk_types::api::Claims;

use crate::auth::AppState;
use crate::error::ApiError;

/// Resolved caller identity, attached to a request before it reaches a
/// handler. Handlers branch on this instead of reading any ambient
/// session state.
#[derive(Debug, Clone)]
pub enum AuthContext {
    Authenticated(Claims),
    Anonymous,
}

/// Refuse the request with 401 unless it carries a valid bearer token.
/// On success the decoded claims are inserted into request extensions,
/// so the handler receives the caller's identity as a parameter.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    match resolve(&state, &req) {
        Some(claims) => {
            req.extensions_mut().insert(claims);
            Ok(next.run(req).await)
        }
        None => Err(ApiError::Unauthenticated),
    }
}

/// Resolve the caller into an explicit [`AuthContext`] without refusing
/// anything. Used by the browser form view, which redirects anonymous
/// callers instead of returning 401.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let context = match resolve(&state, &req) {
        Some(claims) => AuthContext::Authenticated(claims),
        None => AuthContext::Anonymous,
    };

    req.extensions_mut().insert(context);
    next.run(req).await
}

/// Decode the Authorization bearer token. A missing, malformed, or
/// expired token resolves to None.
fn resolve(state: &AppState, req: &Request) -> Option<Claims> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")?;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(state.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .ok()
}
