/// Form actions
///
/// An action takes one form submission from start to finish: validate,
/// perform a single mutation, then either hand back a [`FormState`] to
/// re-render the form or ask the caller to navigate away.
///
/// Navigation is a value ([`ActionOutcome::Redirect`]), not control flow.
/// Once an action returns a redirect it has already done everything it is
/// going to do; the HTTP layer turns it into a `303 See Other`.
///
/// # Modules
///
/// - [`invoices`]: Create, update and delete invoices
/// - [`auth`]: Credentials sign-in and account signup

pub mod auth;
pub mod invoices;

use dashboard_shared::validation::FieldErrors;
use serde::{Deserialize, Serialize};

/// State handed back to the form after a failed submission
///
/// Validation failures carry `errors` and a summary `message`; persistence
/// failures carry only `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FormState {
    /// Field errors plus a summary message
    pub fn invalid(errors: FieldErrors, message: impl Into<String>) -> Self {
        Self {
            errors: Some(errors),
            message: Some(message.into()),
        }
    }

    /// Message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: None,
            message: Some(message.into()),
        }
    }
}

/// Instruction to send the caller to another page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub location: String,
}

impl Navigation {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }
}

/// Result of a form action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Mutation succeeded; navigate away
    Redirect(Navigation),

    /// Mutation succeeded; stay on the current page
    Completed,

    /// Input failed validation; no mutation was attempted
    Invalid(FormState),

    /// The mutation failed
    Failed(FormState),
}

impl ActionOutcome {
    /// State to re-render the form with, if any
    pub fn state(&self) -> Option<&FormState> {
        match self {
            ActionOutcome::Invalid(state) | ActionOutcome::Failed(state) => Some(state),
            _ => None,
        }
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        match self {
            ActionOutcome::Redirect(navigation) => Some(navigation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_state_omits_errors() {
        let state = FormState::message("Database Error: Failed to Create Invoice.");
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "message": "Database Error: Failed to Create Invoice." })
        );
    }

    #[test]
    fn test_invalid_state_serializes_errors() {
        let mut errors = FieldErrors::new();
        errors.add("amount", "Please enter an amount greater than $0.");
        let state = FormState::invalid(errors, "Missing Fields. Failed to Create Invoice.");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["errors"]["amount"][0], "Please enter an amount greater than $0.");
        assert_eq!(json["message"], "Missing Fields. Failed to Create Invoice.");
    }

    #[test]
    fn test_outcome_accessors() {
        let redirect = ActionOutcome::Redirect(Navigation::to("/dashboard/invoices"));
        assert_eq!(redirect.navigation().map(|n| n.location.as_str()), Some("/dashboard/invoices"));
        assert!(redirect.state().is_none());

        let failed = ActionOutcome::Failed(FormState::message("boom"));
        assert!(failed.navigation().is_none());
        assert_eq!(failed.state().and_then(|s| s.message.as_deref()), Some("boom"));
    }
}
