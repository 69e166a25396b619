/// Raw form submissions
///
/// A form submission is a flat mapping of field name to string value.
/// A field that was not submitted is absent, which is distinct from a field
/// submitted as an empty string.
///
/// # Example
///
/// ```
/// use dashboard_shared::form::FormData;
///
/// let form = FormData::from_pairs([("customerId", "c1"), ("amount", "10.50")]);
/// assert_eq!(form.get("customerId"), Some("c1"));
/// assert_eq!(form.get("status"), None);
/// ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flat field name to value mapping submitted by the UI layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    /// Creates an empty submission
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a submission from `(name, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns the raw value of a field, or `None` if it was not submitted
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Sets a field, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<HashMap<String, String>> for FormData {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}
