/// Sign-in and signup endpoints
///
/// - `POST /login` - Authenticate with credentials
/// - `POST /signup` - Create an account
///
/// # Sign-in responses
///
/// - `303 See Other`: Signed in; `Location` is the target page
/// - `204 No Content`: Signed in without a target
/// - `401 Unauthorized`: Body `CredentialSignin`
/// - `500 Internal Server Error`: Any other sign-in failure

use crate::{
    actions::{auth::AuthOutcome, ActionOutcome},
    app::AppState,
    error::ApiResult,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use dashboard_shared::form::FormData;
use std::collections::HashMap;

impl IntoResponse for AuthOutcome {
    fn into_response(self) -> Response {
        match self {
            AuthOutcome::Redirect(navigation) => navigation.into_response(),
            AuthOutcome::SignedIn => StatusCode::NO_CONTENT.into_response(),
            AuthOutcome::CredentialSignin => {
                (StatusCode::UNAUTHORIZED, crate::actions::auth::CREDENTIAL_SIGNIN).into_response()
            }
        }
    }
}

pub async fn authenticate(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> ApiResult<AuthOutcome> {
    Ok(state
        .auth_actions()
        .authenticate(&FormData::from(fields))
        .await?)
}

pub async fn sign_up(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> ActionOutcome {
    state.auth_actions().sign_up(&FormData::from(fields)).await
}
