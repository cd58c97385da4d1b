use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// -- JWT Claims --

/// JWT claims shared between token issuance and the REST middleware.
/// Canonical definition lives here in paydesk-types to eliminate duplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub exp: usize,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user_id: Uuid,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
}

// -- Payments --

/// Raw payment submission as it arrives off the wire. Every field is
/// optional at this level; the validation layer decides what is missing
/// versus malformed so it can report all failures in one pass.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePaymentRequest {
    pub email: Option<String>,
    pub amount: Option<AmountInput>,
    pub currency: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub message: Option<String>,
}

/// Amount as submitted by the client. HTML forms post every value as text,
/// JSON clients send a number; both must parse to a whole number of units.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Integer(i64),
    Text(String),
}

// -- Validation errors --

/// Field-keyed validation failures, serialized as `{"errors": {...}}` in
/// 422 responses.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}
