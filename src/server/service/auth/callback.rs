use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::discord::{DiscordUser, PartialGuild, SessionGuild, SessionUser},
    service::auth::DiscordAuthService,
};

const DISCORD_API_ENDPOINT: &str = "https://discord.com/api/v10";

impl<'a> DiscordAuthService<'a> {
    /// Completes the OAuth flow after Discord redirects back with a code.
    ///
    /// Exchanges the authorization code for an access token, then fetches the
    /// user's profile and guild list. Only guilds where the user holds the
    /// Manage Guild permission are kept; that filtered list becomes the
    /// session's management-rights snapshot.
    ///
    /// # Returns
    /// - `Ok((user, guilds))` - Session identity and manageable guilds
    /// - `Err(AppError::AuthErr(TokenExchangeFailed))` - Discord rejected the code
    /// - `Err(AppError::ReqwestErr(_))` - Profile or guild fetch failed
    pub async fn callback(
        &self,
        authorization_code: String,
    ) -> Result<(SessionUser, Vec<SessionGuild>), AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let user = self.fetch_discord_user(&token).await?;
        let guilds = self.fetch_manageable_guilds(&token).await?;

        let user = SessionUser::from_api(user)?;
        let guilds = guilds
            .into_iter()
            .map(SessionGuild::from_api)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((user, guilds))
    }

    /// Retrieves the Discord user's profile using the provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(format!("{}/users/@me", DISCORD_API_ENDPOINT))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }

    /// Retrieves the guilds the user can manage using the provided access token.
    ///
    /// Fetches the full guild list from Discord and filters it down to guilds
    /// where the user holds Manage Guild.
    async fn fetch_manageable_guilds(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<Vec<PartialGuild>, AppError> {
        let access_token = token.access_token().secret();

        let guilds = self
            .http_client
            .get(format!("{}/users/@me/guilds", DISCORD_API_ENDPOINT))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<Vec<PartialGuild>>()
            .await?;

        Ok(guilds.into_iter().filter(PartialGuild::can_manage).collect())
    }
}
