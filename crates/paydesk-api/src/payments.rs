use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};
use anyhow::anyhow;
use tracing::{info, warn};
use uuid::Uuid;

use paydesk_db::models::{NewPayment, PaymentRow};
use paydesk_types::api::{Claims, CreatePaymentRequest};
use paydesk_types::models::Payment;

use crate::auth::AppState;
use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::middleware::AuthContext;
use crate::validation;

/// Static form view for entering payment fields. Anonymous callers are
/// redirected to the login page before any rendering happens.
pub async fn show_form(Extension(auth): Extension<AuthContext>) -> impl IntoResponse {
    match auth {
        AuthContext::Anonymous => {
            (StatusCode::FOUND, [(header::LOCATION, "/login")]).into_response()
        }
        AuthContext::Authenticated(_) => Html(CREATE_FORM).into_response(),
    }
}

/// Validate the submitted fields and persist exactly one payment owned by
/// the caller. Validation runs in full before any write; a failing
/// submission writes nothing, no matter how often it is repeated.
pub async fn create_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    JsonOrForm(req): JsonOrForm<CreatePaymentRequest>,
) -> Result<Json<Payment>, ApiError> {
    let valid = validation::validate(&req).map_err(ApiError::Validation)?;

    let payment_id = Uuid::new_v4();
    let user_id = claims.sub;

    // Run the blocking DB insert off the async runtime
    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || {
        let id = payment_id.to_string();
        let owner = user_id.to_string();
        db.db.insert_payment(&NewPayment {
            id: &id,
            user_id: &owner,
            email: &valid.email,
            amount: valid.amount,
            currency: &valid.currency,
            name: &valid.name,
            description: &valid.description,
            message: &valid.message,
        })
    })
    .await
    .map_err(|e| ApiError::Internal(anyhow!("spawn_blocking join error: {}", e)))??;

    info!(payment = %payment_id, user = %user_id, "payment request recorded");

    Ok(Json(payment_from_row(row)))
}

fn payment_from_row(row: PaymentRow) -> Payment {
    Payment {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt payment id '{}': {}", row.id, e);
            Uuid::default()
        }),
        user_id: row.user_id.parse().unwrap_or_else(|e| {
            warn!("Corrupt user_id '{}' on payment '{}': {}", row.user_id, row.id, e);
            Uuid::default()
        }),
        created_at: parse_timestamp(&row.created_at, &row.id),
        updated_at: parse_timestamp(&row.updated_at, &row.id),
        email: row.email,
        amount: row.amount,
        currency: row.currency,
        name: row.name,
        description: row.description,
        message: row.message,
    }
}

fn parse_timestamp(raw: &str, payment_id: &str) -> chrono::DateTime<chrono::Utc> {
    raw.parse::<chrono::DateTime<chrono::Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
            // Parse as naive UTC and convert.
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt timestamp '{}' on payment '{}': {}", raw, payment_id, e);
            chrono::DateTime::default()
        })
}

const CREATE_FORM: &str = r#"<!DOCTYPE html>
<html>
<head><title>Create new Invoice</title></head>
<body>
  <h1>Create new Invoice</h1>
  <form method="post" action="/payments">
    <label>Email <input type="email" name="email"></label>
    <label>Amount <input type="number" name="amount" min="1"></label>
    <label>Currency <input type="text" name="currency"></label>
    <label>Name <input type="text" name="name"></label>
    <label>Description <textarea name="description"></textarea></label>
    <label>Message <textarea name="message"></textarea></label>
    <button type="submit">Create</button>
  </form>
</body>
</html>
"#;
