/// Invoice actions
///
/// | Action | Validation failure message                     | Store failure message                        | Success                    |
/// |--------|------------------------------------------------|----------------------------------------------|----------------------------|
/// | create | Missing Fields. Failed to Create Invoice.      | Database Error: Failed to Create Invoice.    | revalidate, redirect       |
/// | update | Missing Fields. Failed to Updated Invoice.     | Database Error: Failed to Update Invoice.    | revalidate, redirect       |
/// | delete | (not validated)                                | Database Error: Failed to Delete Invoice.    | revalidate, stay           |
///
/// Store failures are logged and never retried. The listing is only
/// revalidated after a successful mutation.

use crate::actions::{ActionOutcome, FormState, Navigation};
use chrono::Utc;
use dashboard_shared::cache::{CacheInvalidator, INVOICES_PATH};
use dashboard_shared::form::FormData;
use dashboard_shared::models::invoice::{InvoiceChanges, NewInvoice};
use dashboard_shared::store::InvoiceStore;
use dashboard_shared::validation::invoice::InvoiceInput;
use std::sync::Arc;
use tracing::{info, warn};

pub const CREATE_INVALID: &str = "Missing Fields. Failed to Create Invoice.";
pub const CREATE_FAILED: &str = "Database Error: Failed to Create Invoice.";
pub const UPDATE_INVALID: &str = "Missing Fields. Failed to Updated Invoice.";
pub const UPDATE_FAILED: &str = "Database Error: Failed to Update Invoice.";
pub const DELETE_FAILED: &str = "Database Error: Failed to Delete Invoice.";

/// Invoice create/update/delete handlers
#[derive(Clone)]
pub struct InvoiceActions {
    store: Arc<dyn InvoiceStore>,
    cache: Arc<dyn CacheInvalidator>,
}

impl InvoiceActions {
    pub fn new(store: Arc<dyn InvoiceStore>, cache: Arc<dyn CacheInvalidator>) -> Self {
        Self { store, cache }
    }

    /// Creates an invoice dated today (UTC)
    pub async fn create(&self, form: &FormData) -> ActionOutcome {
        let input = match InvoiceInput::parse(form) {
            Ok(input) => input,
            Err(errors) => return ActionOutcome::Invalid(FormState::invalid(errors, CREATE_INVALID)),
        };

        let invoice = NewInvoice {
            customer_id: input.customer_id.clone(),
            amount_in_cents: input.amount_in_cents,
            status: input.status,
            date: Utc::now().date_naive(),
        };

        if let Err(e) = self.store.insert_invoice(&invoice).await {
            warn!(error = %e, customer_id = %invoice.customer_id, "Failed to create invoice");
            return ActionOutcome::Failed(FormState::message(CREATE_FAILED));
        }

        info!(
            customer_id = %invoice.customer_id,
            amount_in_cents = invoice.amount_in_cents,
            status = %invoice.status,
            "Invoice created"
        );
        self.finish_with_redirect().await
    }

    /// Updates customer, amount and status; the invoice date is kept
    pub async fn update(&self, id: &str, form: &FormData) -> ActionOutcome {
        let input = match InvoiceInput::parse(form) {
            Ok(input) => input,
            Err(errors) => return ActionOutcome::Invalid(FormState::invalid(errors, UPDATE_INVALID)),
        };

        let changes = InvoiceChanges {
            amount_in_cents: input.amount_in_cents,
            customer_id: input.customer_id,
            status: input.status,
        };

        match self.store.update_invoice(id, &changes).await {
            Ok(matched) => {
                info!(invoice_id = id, matched, "Invoice updated");
                self.finish_with_redirect().await
            }
            Err(e) => {
                warn!(error = %e, invoice_id = id, "Failed to update invoice");
                ActionOutcome::Failed(FormState::message(UPDATE_FAILED))
            }
        }
    }

    /// Deletes an invoice; the id is passed through as given
    pub async fn delete(&self, id: &str) -> ActionOutcome {
        match self.store.delete_invoice(id).await {
            Ok(deleted) => {
                info!(invoice_id = id, deleted, "Invoice deleted");
                self.cache.revalidate_path(INVOICES_PATH).await;
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!(error = %e, invoice_id = id, "Failed to delete invoice");
                ActionOutcome::Failed(FormState::message(DELETE_FAILED))
            }
        }
    }

    async fn finish_with_redirect(&self) -> ActionOutcome {
        self.cache.revalidate_path(INVOICES_PATH).await;
        ActionOutcome::Redirect(Navigation::to(INVOICES_PATH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_shared::cache::PathRevalidator;
    use dashboard_shared::models::invoice::InvoiceStatus;
    use dashboard_shared::store::memory::StoredInvoice;
    use dashboard_shared::store::InMemoryStore;

    fn actions() -> (InvoiceActions, InMemoryStore, PathRevalidator) {
        let store = InMemoryStore::new();
        let cache = PathRevalidator::new();
        let actions = InvoiceActions::new(Arc::new(store.clone()), Arc::new(cache.clone()));
        (actions, store, cache)
    }

    fn form(customer: &str, amount: &str, status: &str) -> FormData {
        FormData::from_pairs([
            ("customerId", customer),
            ("amount", amount),
            ("status", status),
        ])
    }

    fn seeded(store: &InMemoryStore, id: &str) {
        store
            .seed_invoice(StoredInvoice {
                id: id.to_string(),
                customer_id: "c1".to_string(),
                amount_in_cents: 100,
                status: InvoiceStatus::Pending,
                date: chrono::NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            })
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_inserts_cents_and_today() {
        let (actions, store, cache) = actions();

        let outcome = actions.create(&form("c1", "10.50", "pending")).await;

        assert_eq!(outcome, ActionOutcome::Redirect(Navigation::to("/dashboard/invoices")));
        let invoices = store.invoices();
        assert_eq!(invoices.len(), 1);
        assert_eq!(invoices[0].customer_id, "c1");
        assert_eq!(invoices[0].amount_in_cents, 1050);
        assert_eq!(invoices[0].status, InvoiceStatus::Pending);
        assert_eq!(invoices[0].date, Utc::now().date_naive());
        assert_eq!(cache.generation(INVOICES_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_create_invalid_amount_skips_store() {
        let (actions, store, cache) = actions();

        for amount in ["0", "-5", "abc", "0.001", "1e300"] {
            let outcome = actions.create(&form("c1", amount, "paid")).await;
            let state = outcome.state().expect("should return state");
            assert!(matches!(outcome, ActionOutcome::Invalid(_)));
            assert!(state.errors.as_ref().unwrap().contains("amount"));
            assert_eq!(state.message.as_deref(), Some(CREATE_INVALID));
        }

        assert_eq!(store.mutation_count(), 0);
        assert_eq!(cache.generation(INVOICES_PATH).await, 0);
    }

    #[tokio::test]
    async fn test_create_invalid_status() {
        let (actions, _, _) = actions();

        let outcome = actions.create(&form("c1", "10", "overdue")).await;
        let errors = outcome.state().and_then(|s| s.errors.clone()).unwrap();
        assert!(errors.contains("status"));
        assert!(!errors.contains("amount"));
    }

    #[tokio::test]
    async fn test_create_store_failure_is_message_only() {
        let (actions, store, cache) = actions();
        store.set_failing(true);

        let outcome = actions.create(&form("c1", "10", "paid")).await;

        assert_eq!(outcome, ActionOutcome::Failed(FormState::message(CREATE_FAILED)));
        assert!(outcome.state().unwrap().errors.is_none());
        assert_eq!(store.mutation_count(), 1);
        assert_eq!(cache.generation(INVOICES_PATH).await, 0);
    }

    #[tokio::test]
    async fn test_update_keeps_date() {
        let (actions, store, cache) = actions();
        seeded(&store, "inv-1");

        let outcome = actions.update("inv-1", &form("c2", "0.29", "paid")).await;

        assert_eq!(outcome.navigation(), Some(&Navigation::to(INVOICES_PATH)));
        let invoice = store.invoice("inv-1").unwrap();
        assert_eq!(invoice.customer_id, "c2");
        assert_eq!(invoice.amount_in_cents, 29);
        assert_eq!(invoice.status, InvoiceStatus::Paid);
        assert_eq!(invoice.date, chrono::NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(cache.generation(INVOICES_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_update_validation_message() {
        let (actions, store, _) = actions();
        seeded(&store, "inv-1");

        let outcome = actions.update("inv-1", &FormData::new()).await;

        assert_eq!(
            outcome.state().and_then(|s| s.message.as_deref()),
            Some("Missing Fields. Failed to Updated Invoice.")
        );
        assert_eq!(store.invoice("inv-1").unwrap().amount_in_cents, 100);
    }

    #[tokio::test]
    async fn test_update_store_failure() {
        let (actions, store, cache) = actions();
        seeded(&store, "inv-1");
        store.set_failing(true);

        let outcome = actions.update("inv-1", &form("c2", "3", "paid")).await;

        assert_eq!(outcome, ActionOutcome::Failed(FormState::message(UPDATE_FAILED)));
        assert_eq!(cache.generation(INVOICES_PATH).await, 0);
    }

    #[tokio::test]
    async fn test_delete_passes_id_through() {
        let (actions, store, cache) = actions();
        seeded(&store, "not a uuid at all");

        let outcome = actions.delete("not a uuid at all").await;

        assert_eq!(outcome, ActionOutcome::Completed);
        assert!(store.invoice("not a uuid at all").is_none());
        assert_eq!(cache.generation(INVOICES_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_delete_store_failure() {
        let (actions, store, cache) = actions();
        seeded(&store, "inv-1");
        store.set_failing(true);

        let outcome = actions.delete("inv-1").await;

        assert_eq!(outcome, ActionOutcome::Failed(FormState::message(DELETE_FAILED)));
        assert!(store.invoice("inv-1").is_some());
        assert_eq!(cache.generation(INVOICES_PATH).await, 0);
    }
}
