use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted payment request. Not an actual financial transaction —
/// the record captures what a user asked to be paid, nothing more.
/// Payments are create-only: once written they are never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
