/// Storage seams used by the dashboard actions
///
/// Actions never talk to the database directly. They go through the
/// [`InvoiceStore`] and [`UserStore`] traits so a test can swap in
/// [`InMemoryStore`] without a running PostgreSQL.
///
/// # Implementations
///
/// - [`PgStore`]: PostgreSQL via `sqlx`
/// - [`InMemoryStore`]: process-local maps, with failure injection
///
/// # Example
///
/// ```
/// use dashboard_shared::store::{InMemoryStore, InvoiceStore};
///
/// # async fn example() -> Result<(), dashboard_shared::store::StoreError> {
/// let store = InMemoryStore::new();
/// assert!(!store.delete_invoice("missing").await?);
/// # Ok(())
/// # }
/// ```

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgStore;

use crate::models::invoice::{InvoiceChanges, NewInvoice};
use crate::models::user::{CreateUser, User};
use async_trait::async_trait;

/// Storage error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Store is not accepting requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Invoice mutations
///
/// Each method issues exactly one statement and is attempted once.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> StoreResult<()>;

    /// Returns `true` if an invoice with `id` existed
    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> StoreResult<bool>;

    /// Returns `true` if an invoice with `id` was removed
    async fn delete_invoice(&self, id: &str) -> StoreResult<bool>;

    /// Verifies the store is reachable
    async fn ping(&self) -> StoreResult<()>;
}

/// User lookups and signup writes
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    async fn create_user(&self, user: CreateUser) -> StoreResult<User>;
}
