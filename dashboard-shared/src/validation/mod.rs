/// Form validation schemas
///
/// Each schema turns a raw [`FormData`](crate::form::FormData) submission
/// into either a typed record or a [`FieldErrors`] map. Validation never
/// stops at the first failure: every field is checked and every violated
/// rule is reported.
///
/// # Modules
///
/// - [`invoice`]: Create/update invoice schema
/// - [`signup`]: Account signup schema
///
/// # Example
///
/// ```
/// use dashboard_shared::form::FormData;
/// use dashboard_shared::validation::invoice::InvoiceInput;
///
/// let form = FormData::from_pairs([("customerId", "c1"), ("amount", "0"), ("status", "paid")]);
/// let errors = InvoiceInput::parse(&form).unwrap_err();
/// assert!(errors.contains("amount"));
/// ```

pub mod invoice;
pub mod signup;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name to list of human-readable messages
///
/// Fields appear in name order when serialized; messages keep the order in
/// which the rules were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Returns the messages recorded for a field
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<validator::ValidationErrors> for FieldErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errors) in errors.field_errors() {
            for error in errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}
