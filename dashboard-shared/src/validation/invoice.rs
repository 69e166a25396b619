/// Create/update invoice schema
///
/// Only `customerId`, `amount` and `status` come from the form. The invoice
/// id is supplied by the route and the date is stamped by the action.
///
/// # Rules
///
/// | Field        | Rule                                   | Message                                   |
/// |--------------|----------------------------------------|-------------------------------------------|
/// | `customerId` | present, not blank                     | Please select a customer                  |
/// | `amount`     | finite number, at least one whole cent | Please enter an amount greater than $0.   |
/// | `status`     | exactly `pending` or `paid`            | Please select an invoice status           |

use crate::form::FormData;
use crate::models::invoice::InvoiceStatus;
use crate::validation::FieldErrors;

pub const CUSTOMER_MESSAGE: &str = "Please select a customer";
pub const AMOUNT_MESSAGE: &str = "Please enter an amount greater than $0.";
pub const STATUS_MESSAGE: &str = "Please select an invoice status";

/// Validated invoice fields
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceInput {
    pub customer_id: String,

    /// Amount in integer cents, always `>= 1`
    pub amount_in_cents: i64,

    pub status: InvoiceStatus,
}

impl InvoiceInput {
    /// Parses and coerces the invoice fields of a submission
    ///
    /// # Errors
    ///
    /// Returns every failing field with its message.
    pub fn parse(form: &FormData) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let customer_id = match form.get("customerId").map(str::trim) {
            Some(id) if !id.is_empty() => Some(id.to_string()),
            _ => {
                errors.add("customerId", CUSTOMER_MESSAGE);
                None
            }
        };

        let amount_in_cents = match form.get("amount").and_then(coerce_amount).and_then(to_cents) {
            Some(cents) if cents >= 1 => Some(cents),
            _ => {
                errors.add("amount", AMOUNT_MESSAGE);
                None
            }
        };

        let status = match form.get("status").and_then(|s| s.parse::<InvoiceStatus>().ok()) {
            Some(status) => Some(status),
            None => {
                errors.add("status", STATUS_MESSAGE);
                None
            }
        };

        match (customer_id, amount_in_cents, status) {
            (Some(customer_id), Some(amount_in_cents), Some(status)) if errors.is_empty() => {
                Ok(Self {
                    customer_id,
                    amount_in_cents,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Coerces a raw amount string to a number
///
/// Blank input reads as zero. Anything that is not a finite decimal number
/// yields `None`.
pub fn coerce_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Rounds a major-unit amount to the nearest cent
///
/// Returns `None` when the result does not fit in an `i64`.
pub fn to_cents(amount: f64) -> Option<i64> {
    let cents = (amount * 100.0).round();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range
    if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
        Some(cents as i64)
    } else {
        None
    }
}
