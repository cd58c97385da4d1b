use crate::models::{NewPayment, PaymentRow, UserRow};
use crate::Database;
use anyhow::{Result, anyhow};
use rusqlite::Connection;

impl Database {
    // -- Users --

    pub fn create_user(&self, id: &str, username: &str, password_hash: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (id, username, password) VALUES (?1, ?2, ?3)",
                (id, username, password_hash),
            )?;
            Ok(())
        })
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<UserRow>> {
        self.with_conn(|conn| query_user_by_username(conn, username))
    }

    // -- Payments --

    /// Insert a validated payment and read the stored row back, so callers
    /// see the store-assigned timestamps.
    pub fn insert_payment(&self, payment: &NewPayment) -> Result<PaymentRow> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO payments (id, user_id, email, amount, currency, name, description, message)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                rusqlite::params![
                    payment.id,
                    payment.user_id,
                    payment.email,
                    payment.amount,
                    payment.currency,
                    payment.name,
                    payment.description,
                    payment.message,
                ],
            )?;

            query_payment(conn, payment.id)?
                .ok_or_else(|| anyhow!("Payment not found after insert: {}", payment.id))
        })
    }

    pub fn get_payment(&self, id: &str) -> Result<Option<PaymentRow>> {
        self.with_conn(|conn| query_payment(conn, id))
    }

    pub fn count_payments(&self) -> Result<i64> {
        self.with_conn(|conn| {
            let count = conn.query_row("SELECT COUNT(*) FROM payments", [], |row| row.get(0))?;
            Ok(count)
        })
    }
}

fn query_user_by_username(conn: &Connection, username: &str) -> Result<Option<UserRow>> {
    let mut stmt =
        conn.prepare("SELECT id, username, password, created_at FROM users WHERE username = ?1")?;

    let row = stmt
        .query_row([username], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                created_at: row.get(3)?,
            })
        })
        .optional()?;

    Ok(row)
}

fn query_payment(conn: &Connection, id: &str) -> Result<Option<PaymentRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, email, amount, currency, name, description, message, created_at, updated_at
         FROM payments
         WHERE id = ?1",
    )?;

    let row = stmt
        .query_row([id], |row| {
            Ok(PaymentRow {
                id: row.get(0)?,
                user_id: row.get(1)?,
                email: row.get(2)?,
                amount: row.get(3)?,
                currency: row.get(4)?,
                name: row.get(5)?,
                description: row.get(6)?,
                message: row.get(7)?,
                created_at: row.get(8)?,
                updated_at: row.get(9)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
