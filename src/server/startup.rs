use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::Key, service::SignedCookie, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then automatically runs all pending SeaORM migrations so the schema is
/// up-to-date before the application accesses the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session middleware backed by the application database.
///
/// Sessions are stored in SQLite alongside the domain tables, signed with
/// the configured secret, and expire after one day of inactivity (rolling).
///
/// # Arguments
/// - `config` - Application configuration containing the session secret
/// - `db` - Database connection whose pool backs the session store
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Configured session middleware
/// - `Err(AppError)` - Failed to migrate the session table or derive the signing key
pub async fn connect_to_session(
    config: &Config,
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "SESSION_SECRET".to_string(),
            reason: "signing key material must be at least 64 bytes".to_string(),
        }
    })?;

    Ok(SessionManagerLayer::new(session_store)
        .with_expiry(Expiry::OnInactivity(Duration::days(1)))
        .with_signed(key))
}

/// Creates the HTTP client used for Discord API requests.
///
/// Redirects are disabled: the client only ever talks to fixed Discord
/// endpoints, and the oauth2 token exchange requires a non-redirecting client.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Configures the OAuth2 client for Discord authentication.
///
/// # Arguments
/// - `config` - Application configuration with client credentials and endpoints
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client ready to generate login URLs and exchange codes
/// - `Err(AppError::ConfigErr(_))` - A configured URL failed to parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone()).map_err(|e| {
        ConfigError::InvalidUrl {
            name: "discord_auth_url".to_string(),
            source: e,
        }
    })?;
    let token_url = TokenUrl::new(config.discord_token_url.clone()).map_err(|e| {
        ConfigError::InvalidUrl {
            name: "discord_token_url".to_string(),
            source: e,
        }
    })?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone()).map_err(|e| {
        ConfigError::InvalidUrl {
            name: "DISCORD_REDIRECT_URL".to_string(),
            source: e,
        }
    })?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}
