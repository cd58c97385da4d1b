use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::{self, AppState};
use crate::middleware::{require_auth, resolve_identity};
use crate::payments;

/// Assemble the service router. Lives outside the binary so integration
/// tests drive the exact same route table.
pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/login", get(auth::login_page))
        .with_state(state.clone());

    // Browser form view: anonymous callers get a redirect, not a 401.
    let form_routes = Router::new()
        .route("/payments/create", get(payments::show_form))
        .layer(middleware::from_fn_with_state(state.clone(), resolve_identity));

    let payment_routes = Router::new()
        .route("/payments", post(payments::create_payment))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    Router::new()
        .merge(auth_routes)
        .merge(form_routes)
        .merge(payment_routes)
}
