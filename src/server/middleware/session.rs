//! Type-safe session management wrappers.
//!
//! This module provides type-safe interfaces for managing different aspects of user sessions,
//! organized by concern. Each struct handles a specific domain of session data, preventing
//! typos, ensuring type consistency, and centralizing session-related logic.
//!
//! Session management is split into two concerns:
//! - `AuthSession` - Authenticated identity and manageable guild list
//! - `CsrfSession` - CSRF token management for the OAuth flow
//!
//! Each struct wraps the same underlying `Session` but exposes only the methods
//! relevant to its concern.

use tower_sessions::Session;

use crate::server::{
    error::AppError,
    model::discord::{SessionGuild, SessionUser},
};

// Session key constants
const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_AUTH_GUILDS: &str = "auth:guilds";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Handles the authenticated user's identity and the list of guilds they may
/// manage, both captured once at login.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the authenticated user in the session.
    ///
    /// Called after a successful OAuth callback to establish a logged-in session.
    ///
    /// # Returns
    /// - `Ok(())` - User successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the authenticated user from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in or expired)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        let user = self.session.get::<SessionUser>(SESSION_AUTH_USER).await?;
        Ok(user)
    }

    /// Stores the user's manageable guilds in the session.
    ///
    /// The list is the login-time snapshot of guilds where the user holds
    /// Manage Guild; it is not refreshed until the next login.
    ///
    /// # Returns
    /// - `Ok(())` - Guild list successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_guilds(&self, guilds: &[SessionGuild]) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_GUILDS, guilds).await?;
        Ok(())
    }

    /// Retrieves the user's manageable guilds from the session.
    ///
    /// # Returns
    /// - `Ok(Some(guilds))` - Guild list captured at login
    /// - `Ok(None)` - No guild list in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_guilds(&self) -> Result<Option<Vec<SessionGuild>>, AppError> {
        let guilds = self
            .session
            .get::<Vec<SessionGuild>>(SESSION_AUTH_GUILDS)
            .await?;
        Ok(guilds)
    }

    /// Destroys the session and its server-side record.
    ///
    /// Used during logout. Flushing (rather than clearing) deletes the store
    /// record so the old session ID cannot be revived.
    ///
    /// # Returns
    /// - `Ok(())` - Session destroyed
    /// - `Err(AppError::SessionErr(_))` - Failed to delete the session record
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for the OAuth flow. Tokens are
/// stored during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    /// Creates a new CsrfSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// Used during OAuth flow initiation to store a random token that will
    /// be validated during the callback to prevent CSRF attacks.
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// This is used during OAuth callback validation. The token is removed
    /// to prevent replay attacks - each token can only be used once.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
