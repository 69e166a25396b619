/// Invoice form endpoints
///
/// - `POST /dashboard/invoices/create` - Create invoice
/// - `POST /dashboard/invoices/:id/edit` - Update invoice
/// - `POST /dashboard/invoices/:id/delete` - Delete invoice
///
/// # Form fields
///
/// ```text
/// customerId=3958dc9e-712f-4377-85e9-fec4b6a6442a&amount=10.50&status=pending
/// ```

use crate::{actions::ActionOutcome, app::AppState};
use axum::{
    extract::{Path, State},
    Form,
};
use dashboard_shared::form::FormData;
use std::collections::HashMap;

pub async fn create_invoice(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> ActionOutcome {
    state.invoice_actions().create(&FormData::from(fields)).await
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<HashMap<String, String>>,
) -> ActionOutcome {
    state
        .invoice_actions()
        .update(&id, &FormData::from(fields))
        .await
}

/// Deletes without reading a body
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ActionOutcome {
    state.invoice_actions().delete(&id).await
}
