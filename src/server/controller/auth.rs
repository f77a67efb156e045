use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    model::api::LoginViewDto,
    service::auth::DiscordAuthService,
    state::AppState,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Both fields are optional because Discord omits them when the user cancels
/// the authorization prompt; a missing code sends the user back to the login
/// page instead of erroring.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: Option<String>,
    /// Authorization code from Discord for token exchange.
    pub code: Option<String>,
}

/// GET / - landing page.
///
/// Authenticated users are sent to their landing page (admin overview for
/// configured admins, dashboard otherwise); everyone else gets the login
/// view with the Discord authorization entry point.
pub async fn root(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let auth_session = AuthSession::new(&session);

    if let Some(user) = auth_session.get_user().await? {
        let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
        let target = if guard.is_admin(&user) {
            "/admin"
        } else {
            "/dashboard"
        };
        return Ok(Redirect::temporary(target).into_response());
    }

    Ok(Json(LoginViewDto {
        login_url: "/login".to_string(),
    })
    .into_response())
}

/// GET /login - starts the OAuth flow.
///
/// Stores the CSRF state token in the session and redirects the user to
/// Discord's authorization page.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    // Store CSRF token in session for verification during callback
    let csrf_session = CsrfSession::new(&session);
    csrf_session.set_token(csrf_token.secret().clone()).await?;

    Ok(Redirect::temporary(url.as_ref()))
}

/// GET /auth/discord/callback - completes the OAuth flow.
///
/// A missing authorization code (user cancelled at Discord) goes back to the
/// login page. Otherwise the CSRF state is validated, the code is exchanged,
/// and the session captures the user plus their manageable guild snapshot
/// before redirecting to the landing page.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Response, AppError> {
    let Some(code) = params.code else {
        return Ok(Redirect::temporary("/").into_response());
    };

    validate_csrf(&session, params.state.as_deref()).await?;

    let auth_service = DiscordAuthService::new(&state.http_client, &state.oauth_client);
    let (user, guilds) = auth_service.callback(code).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_user(&user).await?;
    auth_session.set_guilds(&guilds).await?;

    tracing::debug!(
        user_id = user.id,
        manageable_guilds = guilds.len(),
        "user logged in"
    );

    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let target = if guard.is_admin(&user) {
        "/admin"
    } else {
        "/dashboard"
    };

    Ok(Redirect::temporary(target).into_response())
}

/// GET /logout - destroys the session.
///
/// Flushes the server-side session record and sends the user back to the
/// login page.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);
    auth_session.destroy().await?;

    Ok(Redirect::temporary("/"))
}

async fn validate_csrf(session: &Session, csrf_state: Option<&str>) -> Result<(), AppError> {
    let csrf_session = CsrfSession::new(session);
    let stored_state = csrf_session.take_token().await?;

    if let (Some(stored), Some(received)) = (stored_state, csrf_state) {
        if stored == received {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
