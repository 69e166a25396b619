/// HTTP route handlers
///
/// - `health`: Health check endpoint
/// - `invoices`: Invoice form actions
/// - `auth`: Sign-in and signup form actions
///
/// # Responses
///
/// | Outcome                    | Status                   | Body            |
/// |----------------------------|--------------------------|-----------------|
/// | redirect                   | 303 See Other + Location | empty           |
/// | completed                  | 204 No Content           | empty           |
/// | validation failure         | 422 Unprocessable Entity | JSON form state |
/// | persistence failure        | 500 Internal Server Error| JSON form state |

pub mod auth;
pub mod health;
pub mod invoices;

use crate::actions::{ActionOutcome, Navigation};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

impl IntoResponse for Navigation {
    fn into_response(self) -> Response {
        Redirect::to(&self.location).into_response()
    }
}

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        match self {
            ActionOutcome::Redirect(navigation) => navigation.into_response(),
            ActionOutcome::Completed => StatusCode::NO_CONTENT.into_response(),
            ActionOutcome::Invalid(state) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(state)).into_response()
            }
            ActionOutcome::Failed(state) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Json(state)).into_response()
            }
        }
    }
}
