/// Credentials sign-in provider
///
/// The authenticate action hands the whole form submission to a
/// [`CredentialsProvider`]. A provider either returns the page to send the
/// user to, or fails. Failures caused by bad credentials carry the
/// [`CREDENTIALS_SIGNIN`] marker in their message; callers classify errors by
/// looking for that marker, so any provider (including remote ones that only
/// report a message) can signal a recognised sign-in failure.
///
/// # Example
///
/// ```no_run
/// use dashboard_shared::auth::credentials::{CredentialsProvider, DatabaseCredentialsProvider, SignInOptions};
/// use dashboard_shared::form::FormData;
/// use dashboard_shared::store::InMemoryStore;
/// use std::sync::Arc;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = DatabaseCredentialsProvider::new(Arc::new(InMemoryStore::new()), "/dashboard");
/// let form = FormData::from_pairs([("email", "user@nextmail.com"), ("password", "123456")]);
/// let target = provider.sign_in(&form, SignInOptions { redirect: false }).await?;
/// # Ok(())
/// # }
/// ```

use crate::auth::password::{verify_password, PasswordError};
use crate::form::FormData;
use crate::store::{StoreError, UserStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Marker carried by the message of a bad-credentials failure
pub const CREDENTIALS_SIGNIN: &str = "CredentialsSignin";

/// Options forwarded with a sign-in request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInOptions {
    /// Whether the provider may navigate on its own.
    /// The authenticate action always passes `false`.
    pub redirect: bool,
}

/// Sign-in failure
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    /// Unknown user, wrong password, or incomplete credentials
    #[error("CredentialsSignin: {0}")]
    CredentialsSignin(String),

    #[error("User lookup failed: {0}")]
    Store(#[from] StoreError),

    #[error("Password check failed: {0}")]
    Password(#[from] PasswordError),

    /// Any other provider-reported failure, kept as its message
    #[error("{0}")]
    Provider(String),
}

impl SignInError {
    /// Whether this error represents rejected credentials
    ///
    /// Classification is by message so that errors from any provider are
    /// treated the same way.
    pub fn is_credentials_signin(&self) -> bool {
        self.to_string().contains(CREDENTIALS_SIGNIN)
    }
}

/// External credentials-authentication call
#[async_trait]
pub trait CredentialsProvider: Send + Sync {
    /// Authenticates the submitted credentials
    ///
    /// # Returns
    ///
    /// The redirect target on success, if the provider produced one
    async fn sign_in(
        &self,
        credentials: &FormData,
        options: SignInOptions,
    ) -> Result<Option<String>, SignInError>;
}

/// Provider that checks email and password against the user store
///
/// Reads `email`, `password` and the optional `redirectTo` field. A
/// `redirectTo` is honoured only when it is a local path.
pub struct DatabaseCredentialsProvider {
    users: Arc<dyn UserStore>,
    default_redirect: String,
}

impl DatabaseCredentialsProvider {
    pub fn new(users: Arc<dyn UserStore>, default_redirect: impl Into<String>) -> Self {
        Self {
            users,
            default_redirect: default_redirect.into(),
        }
    }

    fn redirect_target(&self, credentials: &FormData) -> String {
        match credentials.get("redirectTo") {
            Some(path) if is_local_path(path) => path.to_string(),
            _ => self.default_redirect.clone(),
        }
    }
}

#[async_trait]
impl CredentialsProvider for DatabaseCredentialsProvider {
    async fn sign_in(
        &self,
        credentials: &FormData,
        options: SignInOptions,
    ) -> Result<Option<String>, SignInError> {
        let email = credentials.get("email").map(str::trim).unwrap_or_default();
        let password = credentials.get("password").unwrap_or_default();

        if email.is_empty() || password.is_empty() {
            return Err(SignInError::CredentialsSignin(
                "missing email or password".to_string(),
            ));
        }

        let user = self
            .users
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| SignInError::CredentialsSignin("invalid email or password".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            debug!(user_id = %user.id, "Password mismatch");
            return Err(SignInError::CredentialsSignin(
                "invalid email or password".to_string(),
            ));
        }

        info!(user_id = %user.id, redirect = options.redirect, "User signed in");
        Ok(Some(self.redirect_target(credentials)))
    }
}

/// `true` for paths like `/dashboard`, `false` for absolute or
/// protocol-relative URLs
fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use crate::models::user::User;
    use crate::store::InMemoryStore;
    use uuid::Uuid;

    const OPTIONS: SignInOptions = SignInOptions { redirect: false };

    fn provider_with_user(password: &str) -> (DatabaseCredentialsProvider, InMemoryStore) {
        let store = InMemoryStore::new();
        store
            .seed_user(User {
                id: Uuid::new_v4(),
                name: "User".to_string(),
                email: "user@nextmail.com".to_string(),
                password_hash: hash_password(password).unwrap(),
            })
            .unwrap();
        (
            DatabaseCredentialsProvider::new(Arc::new(store.clone()), "/dashboard"),
            store,
        )
    }

    #[tokio::test]
    async fn test_valid_credentials_use_default_redirect() {
        let (provider, _) = provider_with_user("123456");
        let form = FormData::from_pairs([("email", "user@nextmail.com"), ("password", "123456")]);

        let target = provider.sign_in(&form, OPTIONS).await.unwrap();
        assert_eq!(target.as_deref(), Some("/dashboard"));
    }

    #[tokio::test]
    async fn test_local_redirect_honoured() {
        let (provider, _) = provider_with_user("123456");
        let form = FormData::from_pairs([
            ("email", "user@nextmail.com"),
            ("password", "123456"),
            ("redirectTo", "/dashboard/invoices"),
        ]);

        let target = provider.sign_in(&form, OPTIONS).await.unwrap();
        assert_eq!(target.as_deref(), Some("/dashboard/invoices"));
    }

    #[tokio::test]
    async fn test_external_redirect_ignored() {
        let (provider, _) = provider_with_user("123456");
        let form = FormData::from_pairs([
            ("email", "user@nextmail.com"),
            ("password", "123456"),
            ("redirectTo", "//evil.example.com"),
        ]);

        let target = provider.sign_in(&form, OPTIONS).await.unwrap();
        assert_eq!(target.as_deref(), Some("/dashboard"));
    }

    #[tokio::test]
    async fn test_wrong_password_is_credentials_signin() {
        let (provider, _) = provider_with_user("123456");
        let form = FormData::from_pairs([("email", "user@nextmail.com"), ("password", "nope")]);

        let err = provider.sign_in(&form, OPTIONS).await.unwrap_err();
        assert!(err.is_credentials_signin());
    }

    #[tokio::test]
    async fn test_unknown_user_and_missing_fields() {
        let (provider, _) = provider_with_user("123456");

        let unknown = FormData::from_pairs([("email", "who@nextmail.com"), ("password", "123456")]);
        assert!(provider.sign_in(&unknown, OPTIONS).await.unwrap_err().is_credentials_signin());

        let empty = FormData::new();
        assert!(provider.sign_in(&empty, OPTIONS).await.unwrap_err().is_credentials_signin());
    }

    #[tokio::test]
    async fn test_store_failure_is_not_credentials_signin() {
        let (provider, store) = provider_with_user("123456");
        store.set_failing(true);
        let form = FormData::from_pairs([("email", "user@nextmail.com"), ("password", "123456")]);

        let err = provider.sign_in(&form, OPTIONS).await.unwrap_err();
        assert!(matches!(err, SignInError::Store(_)));
        assert!(!err.is_credentials_signin());
    }

    #[test]
    fn test_classification_by_message() {
        assert!(SignInError::Provider("CredentialsSignin: bad credentials".to_string())
            .is_credentials_signin());
        assert!(!SignInError::Provider("Network error".to_string()).is_credentials_signin());
    }
}
