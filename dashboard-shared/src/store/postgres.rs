/// PostgreSQL store
///
/// Thin adapter from the store traits to the model operations.

use crate::db::pool::health_check;
use crate::models::invoice::{Invoice, InvoiceChanges, NewInvoice};
use crate::models::user::{CreateUser, User};
use crate::store::{InvoiceStore, StoreResult, UserStore};
use async_trait::async_trait;
use sqlx::PgPool;

/// Store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvoiceStore for PgStore {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> StoreResult<()> {
        Invoice::create(&self.pool, invoice).await?;
        Ok(())
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> StoreResult<bool> {
        Ok(Invoice::update(&self.pool, id, changes).await?)
    }

    async fn delete_invoice(&self, id: &str) -> StoreResult<bool> {
        Ok(Invoice::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        health_check(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(User::find_by_email(&self.pool, email).await?)
    }

    async fn create_user(&self, user: CreateUser) -> StoreResult<User> {
        Ok(User::create(&self.pool, user).await?)
    }
}
