/// Sign-in and signup actions
///
/// `authenticate` forwards the whole submission to the credentials provider
/// with provider-side redirects turned off. Rejected credentials come back as
/// the [`CREDENTIAL_SIGNIN`] sentinel; every other provider failure is
/// returned as an error for the HTTP layer to turn into a 500.
///
/// Navigation is decided only after the provider returned successfully, so
/// no error path can redirect.

use crate::actions::{ActionOutcome, FormState, Navigation};
use dashboard_shared::auth::credentials::{CredentialsProvider, SignInError, SignInOptions};
use dashboard_shared::auth::password::hash_password;
use dashboard_shared::form::FormData;
use dashboard_shared::models::user::CreateUser;
use dashboard_shared::store::UserStore;
use dashboard_shared::validation::signup::SignupInput;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Returned when the provider rejects the credentials
pub const CREDENTIAL_SIGNIN: &str = "CredentialSignin";

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_INVALID: &str = "Missing Fields. Failed to Create Account.";
pub const SIGNUP_FAILED: &str = "Database Error: Failed to Create Account.";

/// Result of a sign-in attempt that did not fail fatally
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Signed in; navigate to the provider's target
    Redirect(Navigation),

    /// Signed in, but the provider gave no target
    SignedIn,

    /// Credentials were rejected
    CredentialSignin,
}

/// Authentication handlers
#[derive(Clone)]
pub struct AuthActions {
    provider: Arc<dyn CredentialsProvider>,
    users: Arc<dyn UserStore>,
}

impl AuthActions {
    pub fn new(provider: Arc<dyn CredentialsProvider>, users: Arc<dyn UserStore>) -> Self {
        Self { provider, users }
    }

    /// Signs a user in with the submitted credentials
    ///
    /// # Errors
    ///
    /// Any provider failure that is not a rejected-credentials failure
    pub async fn authenticate(&self, form: &FormData) -> Result<AuthOutcome, SignInError> {
        let target = match self
            .provider
            .sign_in(form, SignInOptions { redirect: false })
            .await
        {
            Ok(target) => target,
            Err(e) if e.is_credentials_signin() => {
                warn!(error = %e, "Sign-in rejected");
                return Ok(AuthOutcome::CredentialSignin);
            }
            Err(e) => {
                error!(error = %e, "Sign-in failed");
                return Err(e);
            }
        };

        Ok(match target {
            Some(location) => AuthOutcome::Redirect(Navigation::to(location)),
            None => AuthOutcome::SignedIn,
        })
    }

    /// Registers an account and sends the user to the login page
    pub async fn sign_up(&self, form: &FormData) -> ActionOutcome {
        let input = match SignupInput::parse(form) {
            Ok(input) => input,
            Err(errors) => return ActionOutcome::Invalid(FormState::invalid(errors, SIGNUP_INVALID)),
        };

        let password_hash = match hash_password(&input.password) {
            Ok(hash) => hash,
            Err(e) => {
                error!(error = %e, "Failed to hash password");
                return ActionOutcome::Failed(FormState::message(SIGNUP_FAILED));
            }
        };

        let created = self
            .users
            .create_user(CreateUser {
                name: input.name,
                email: input.email,
                password_hash,
            })
            .await;

        match created {
            Ok(user) => {
                info!(user_id = %user.id, "Account created");
                ActionOutcome::Redirect(Navigation::to(LOGIN_PATH))
            }
            Err(e) => {
                warn!(error = %e, "Failed to create account");
                ActionOutcome::Failed(FormState::message(SIGNUP_FAILED))
            }
        }
    }
}
