use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::server::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Covers both "never logged in" and "session expired"; the two are
    /// deliberately indistinguishable. Results in a redirect to the login
    /// page rather than an error response.
    #[error("No authenticated user in session")]
    NotAuthenticated,

    /// Authenticated user is not in the configured admin set.
    ///
    /// Results in a redirect to the general dashboard. This is a silent
    /// privilege downgrade, not an error page.
    #[error("User {0} attempted an admin action without admin permissions")]
    AccessDenied(u64),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The identity provider rejected the authorization code exchange.
    ///
    /// Authorization codes are single-use and short-lived, so there is no
    /// retry; the user must restart the login flow. Results in a 500
    /// response with a generic message and no partial session written.
    #[error("Failed to exchange authorization code for access token: {0}")]
    TokenExchangeFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Missing authentication and denied authorization become redirects to the
/// login page and general dashboard respectively; CSRF failures are 400s;
/// provider failures are 500s with generic client-facing messages.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotAuthenticated => Redirect::temporary("/").into_response(),
            Self::AccessDenied(user_id) => {
                tracing::debug!("User {} denied admin access, redirecting", user_id);
                Redirect::temporary("/dashboard").into_response()
            }
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "There was an issue logging you in, please try again.".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExchangeFailed(detail) => {
                tracing::error!("OAuth code exchange failed: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Authentication error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
