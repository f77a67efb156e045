use std::collections::HashSet;

use crate::server::error::{config::ConfigError, AppError};

const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
const DISCORD_TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

const DEFAULT_BOT_ID: &str = "guardbot";
const DEFAULT_PORT: u16 = 3001;

pub struct Config {
    pub database_url: String,

    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,

    pub discord_auth_url: String,
    pub discord_token_url: String,

    /// Signing key material for the session cookie, at least 64 bytes.
    pub session_secret: String,

    /// Discord IDs granted admin access, from a comma-separated env list.
    pub admin_user_ids: HashSet<u64>,

    /// Shared secret the bot process sends on the stats ingestion endpoint.
    pub bot_update_secret: String,

    /// Invite URL shown next to guilds the bot is not installed in.
    pub bot_invite_url: String,

    /// Stats row key the dashboard reads.
    pub bot_id: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            discord_client_id: require_env("DISCORD_CLIENT_ID")?,
            discord_client_secret: require_env("DISCORD_CLIENT_SECRET")?,
            discord_redirect_url: require_env("DISCORD_REDIRECT_URL")?,
            discord_auth_url: DISCORD_AUTH_URL.to_string(),
            discord_token_url: DISCORD_TOKEN_URL.to_string(),
            session_secret: require_env("SESSION_SECRET")?,
            admin_user_ids: parse_admin_ids(std::env::var("ADMIN_USER_ID").ok().as_deref())?,
            bot_update_secret: require_env("BOT_UPDATE_SECRET")?,
            bot_invite_url: require_env("BOT_INVITE_URL")?,
            bot_id: std::env::var("BOT_ID").unwrap_or_else(|_| DEFAULT_BOT_ID.to_string()),
            port: parse_port(std::env::var("PORT").ok().as_deref())?,
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()).into())
}

/// Parses the comma-separated admin ID list.
///
/// An unset variable yields an empty set (no admins), which locks every
/// admin route behind the dashboard redirect. Blank segments are skipped so
/// trailing commas are harmless; a non-numeric segment is a hard error.
fn parse_admin_ids(raw: Option<&str>) -> Result<HashSet<u64>, AppError> {
    let Some(raw) = raw else {
        return Ok(HashSet::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "ADMIN_USER_ID".to_string(),
                    reason: format!("'{}' is not a valid Discord ID", id),
                }
                .into()
            })
        })
        .collect()
}

fn parse_port(raw: Option<&str>) -> Result<u16, AppError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| {
            ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: format!("'{}' is not a valid port number", value),
            }
            .into()
        }),
    }
}
