/// Database row types — these map directly to SQLite rows.
/// Distinct from paydesk-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    pub created_at: String,
}

pub struct PaymentRow {
    pub id: String,
    pub user_id: String,
    pub email: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub message: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Field set for a payments insert. `user_id` always comes from the
/// authenticated caller, never from the request body.
pub struct NewPayment<'a> {
    pub id: &'a str,
    pub user_id: &'a str,
    pub email: &'a str,
    pub amount: i64,
    pub currency: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub message: &'a str,
}
