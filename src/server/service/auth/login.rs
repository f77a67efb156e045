use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::DiscordAuthService;

impl<'a> DiscordAuthService<'a> {
    /// Builds the Discord authorization URL for the login redirect.
    ///
    /// Requests the `identify`, `guilds`, and `email` scopes so the callback
    /// can read the user's profile and their guild list. The returned CSRF
    /// token must be stored in the session and checked on callback.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("identify".to_string()))
            .add_scope(Scope::new("guilds".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .url();

        (authorize_url, csrf_state)
    }
}
