/// In-memory store for tests and local development
///
/// Keeps invoices and users in process-local maps. Calling
/// [`InMemoryStore::set_failing`] makes every operation fail with
/// [`StoreError::Unavailable`], which is how tests exercise the persistence
/// error paths of the actions.

use crate::models::invoice::{InvoiceChanges, InvoiceStatus, NewInvoice};
use crate::models::user::{CreateUser, User};
use crate::store::{InvoiceStore, StoreError, StoreResult, UserStore};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Invoice as held by the in-memory store
#[derive(Debug, Clone, PartialEq)]
pub struct StoredInvoice {
    pub id: String,
    pub customer_id: String,
    pub amount_in_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// In-memory invoice and user store
///
/// Clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    invoices: Arc<RwLock<HashMap<String, StoredInvoice>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
    failing: Arc<AtomicBool>,
    mutations: Arc<AtomicUsize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent operation fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of mutation attempts that reached the store, failed ones included
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }

    /// Inserts an invoice directly, bypassing the mutation counter
    pub fn seed_invoice(&self, invoice: StoredInvoice) -> StoreResult<()> {
        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire write lock: {}", e)))?;
        invoices.insert(invoice.id.clone(), invoice);
        Ok(())
    }

    /// Inserts a user directly
    pub fn seed_user(&self, user: User) -> StoreResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire write lock: {}", e)))?;
        users.insert(user.email.clone(), user);
        Ok(())
    }

    /// Returns a stored invoice by id
    pub fn invoice(&self, id: &str) -> Option<StoredInvoice> {
        self.invoices.read().ok()?.get(id).cloned()
    }

    /// Returns all stored invoices
    pub fn invoices(&self) -> Vec<StoredInvoice> {
        self.invoices
            .read()
            .map(|invoices| invoices.values().cloned().collect())
            .unwrap_or_default()
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("in-memory store set to fail".to_string()));
        }
        Ok(())
    }

    fn begin_mutation(&self) -> StoreResult<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        self.check_available()
    }
}

#[async_trait]
impl InvoiceStore for InMemoryStore {
    async fn insert_invoice(&self, invoice: &NewInvoice) -> StoreResult<()> {
        self.begin_mutation()?;

        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire write lock: {}", e)))?;

        let id = Uuid::new_v4().to_string();
        invoices.insert(
            id.clone(),
            StoredInvoice {
                id,
                customer_id: invoice.customer_id.clone(),
                amount_in_cents: invoice.amount_in_cents,
                status: invoice.status,
                date: invoice.date,
            },
        );

        Ok(())
    }

    async fn update_invoice(&self, id: &str, changes: &InvoiceChanges) -> StoreResult<bool> {
        self.begin_mutation()?;

        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire write lock: {}", e)))?;

        match invoices.get_mut(id) {
            Some(invoice) => {
                invoice.customer_id = changes.customer_id.clone();
                invoice.amount_in_cents = changes.amount_in_cents;
                invoice.status = changes.status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_invoice(&self, id: &str) -> StoreResult<bool> {
        self.begin_mutation()?;

        let mut invoices = self
            .invoices
            .write()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire write lock: {}", e)))?;

        Ok(invoices.remove(id).is_some())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}

#[async_trait]
impl UserStore for InMemoryStore {
    async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.check_available()?;

        let users = self
            .users
            .read()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.get(email).cloned())
    }

    async fn create_user(&self, user: CreateUser) -> StoreResult<User> {
        self.begin_mutation()?;

        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::Unavailable(format!("Failed to acquire write lock: {}", e)))?;

        if users.contains_key(&user.email) {
            return Err(StoreError::Unavailable(format!(
                "duplicate key value violates unique constraint on email: {}",
                user.email
            )));
        }

        let created = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
        };
        users.insert(created.email.clone(), created.clone());

        Ok(created)
    }
}
