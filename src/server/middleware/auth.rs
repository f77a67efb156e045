use std::collections::HashSet;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::discord::SessionUser,
};

pub enum Permission {
    Admin,
}

/// Guard that resolves the session identity and checks permissions.
///
/// Admin status is derived from the configured admin ID set rather than a
/// database column, so a user's privileges change on their next request when
/// the set changes, without touching their session.
pub struct AuthGuard<'a> {
    session: &'a Session,
    admin_ids: &'a HashSet<u64>,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session, admin_ids: &'a HashSet<u64>) -> Self {
        Self { session, admin_ids }
    }

    /// Resolves the authenticated user and enforces the given permissions.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Authenticated user holding every required permission
    /// - `Err(AppError::AuthErr(NotAuthenticated))` - No user in session
    /// - `Err(AppError::AuthErr(AccessDenied))` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<SessionUser, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user) = auth_session.get_user().await? else {
            return Err(AuthError::NotAuthenticated.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !self.admin_ids.contains(&user.id) {
                        return Err(AuthError::AccessDenied(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }

    /// Whether the given user is in the configured admin set.
    ///
    /// Used to pick the post-login landing page without raising an error for
    /// non-admins.
    pub fn is_admin(&self, user: &SessionUser) -> bool {
        self.admin_ids.contains(&user.id)
    }
}
