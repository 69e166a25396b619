/// Invoice model and database operations
///
/// Each mutation is a single parameterized statement. Identifiers are bound
/// as text and cast in SQL so callers can pass them through untouched; a
/// malformed identifier surfaces as a database error.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE invoices (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     customer_id UUID NOT NULL REFERENCES customers (id),
///     amount BIGINT NOT NULL,
///     status VARCHAR(255) NOT NULL,
///     date DATE NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use dashboard_shared::models::invoice::{Invoice, InvoiceStatus, NewInvoice};
/// use chrono::Utc;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// Invoice::create(
///     &pool,
///     &NewInvoice {
///         customer_id: "3958dc9e-712f-4377-85e9-fec4b6a6442a".to_string(),
///         amount_in_cents: 1050,
///         status: InvoiceStatus::Pending,
///         date: Utc::now().date_naive(),
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Invoice payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is not `pending` or `paid`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown invoice status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for InvoiceStatus {
    type Err = UnknownStatus;

    /// Matches exactly; no trimming or case folding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Invoice row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: Uuid,

    pub customer_id: Uuid,

    /// Amount in cents
    pub amount: i64,

    /// Stored as text; see [`Invoice::status`]
    pub status: String,

    pub date: NaiveDate,
}

/// Values for a new invoice row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Values written by an invoice update
///
/// The invoice date is never changed by an update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceChanges {
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
}

impl Invoice {
    /// Parsed status, or `None` if the stored value is unknown
    pub fn status(&self) -> Option<InvoiceStatus> {
        self.status.parse().ok()
    }

    /// Inserts a new invoice
    ///
    /// # Errors
    ///
    /// Returns an error if the customer id is not a UUID, the customer does
    /// not exist, or the database is unreachable.
    pub async fn create(pool: &PgPool, data: &NewInvoice) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO invoices (customer_id, amount, status, date)
            VALUES ($1::uuid, $2, $3, $4)
            "#,
        )
        .bind(&data.customer_id)
        .bind(data.amount_in_cents)
        .bind(data.status.as_str())
        .bind(data.date)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Updates customer, amount and status of one invoice
    ///
    /// # Returns
    ///
    /// `true` if a row matched the id
    pub async fn update(
        pool: &PgPool,
        id: &str,
        data: &InvoiceChanges,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE invoices
            SET customer_id = $1::uuid, amount = $2, status = $3
            WHERE id = $4::uuid
            "#,
        )
        .bind(&data.customer_id)
        .bind(data.amount_in_cents)
        .bind(data.status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes one invoice
    ///
    /// # Returns
    ///
    /// `true` if a row was deleted
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1::uuid")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Finds an invoice by id
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Self>, sqlx::Error> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = $1::uuid
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(invoice)
    }
}
