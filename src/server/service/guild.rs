//! Guild service for business logic.
//!
//! Builds the server list with bot presence flags and enforces the two-step
//! management check: the caller must hold Manage Guild (session snapshot)
//! and the bot must actually be installed in the guild (last stats push).

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guild_settings::GuildSettingsRepository, stats::BotStatsRepository},
    error::AppError,
    model::{
        api::{GuildDto, GuildSettingsDto, ServerDto},
        discord::SessionGuild,
        guild_settings::{GuildSettings, UpsertGuildSettingsParam},
    },
};

/// Cooldown used when the submitted value is missing or unusable, matching
/// the schema default.
const DEFAULT_COOLDOWN: i32 = 1;

/// Raw settings form fields for a guild.
pub struct SaveGuildSettingsParam {
    pub guild_id: u64,
    pub cooldown: Option<String>,
    pub log_channel_id: Option<String>,
}

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the server list for the caller's manageable guilds.
    ///
    /// Flags each guild with whether the bot is installed, based on the
    /// guild list from the bot's last stats push. Before the first push, no
    /// guild shows the bot as present.
    ///
    /// # Returns
    /// - `Ok(Vec<ServerDto>)` - Guilds in session order with presence flags
    /// - `Err(AppError)` - Database error during stats lookup
    pub async fn servers_with_presence(
        &self,
        guilds: &[SessionGuild],
        bot_id: &str,
    ) -> Result<Vec<ServerDto>, AppError> {
        let stats_repo = BotStatsRepository::new(self.db);
        let stats = stats_repo.find_by_bot_id(bot_id).await?;

        let servers = guilds
            .iter()
            .map(|guild| ServerDto {
                id: guild.id,
                name: guild.name.clone(),
                icon: guild.icon.clone(),
                has_bot: stats.as_ref().is_some_and(|s| s.has_guild(guild.id)),
            })
            .collect();

        Ok(servers)
    }

    /// Checks that the caller may manage a guild and that the bot is there.
    ///
    /// The permission check runs first, so a caller without Manage Guild
    /// learns nothing about whether the bot is installed.
    ///
    /// # Returns
    /// - `Ok(GuildDto)` - Guild from the caller's session snapshot
    /// - `Err(AppError::Forbidden)` - Guild is not in the caller's manageable list
    /// - `Err(AppError::NotFound)` - Bot is not installed in the guild
    pub async fn check_manage_access(
        &self,
        guilds: &[SessionGuild],
        guild_id: u64,
        bot_id: &str,
    ) -> Result<GuildDto, AppError> {
        let Some(guild) = guilds.iter().find(|guild| guild.id == guild_id) else {
            return Err(AppError::Forbidden(
                "You do not have permission to manage this server.".to_string(),
            ));
        };

        let stats_repo = BotStatsRepository::new(self.db);
        let stats = stats_repo.find_by_bot_id(bot_id).await?;

        if !stats.is_some_and(|s| s.has_guild(guild_id)) {
            return Err(AppError::NotFound(
                "Bot is not in this server.".to_string(),
            ));
        }

        Ok(GuildDto {
            id: guild.id,
            name: guild.name.clone(),
            icon: guild.icon.clone(),
        })
    }

    /// Saves a guild's settings from raw form values.
    ///
    /// A missing, unparsable, or negative cooldown becomes the default; the
    /// log channel is trimmed and stored as empty when unset. Both fields are
    /// overwritten on every save.
    ///
    /// # Returns
    /// - `Ok(GuildSettingsDto)` - The saved settings
    /// - `Err(AppError)` - Database error during upsert
    pub async fn save_settings(
        &self,
        param: SaveGuildSettingsParam,
    ) -> Result<GuildSettingsDto, AppError> {
        let repo = GuildSettingsRepository::new(self.db);

        let settings = repo
            .upsert(UpsertGuildSettingsParam {
                guild_id: param.guild_id,
                cooldown: coerce_cooldown(param.cooldown.as_deref()),
                log_channel_id: param
                    .log_channel_id
                    .map(|id| id.trim().to_string())
                    .unwrap_or_default(),
            })
            .await?;

        Ok(settings.into_dto())
    }

    /// Fetches a guild's saved settings, if any.
    pub async fn settings(&self, guild_id: u64) -> Result<Option<GuildSettingsDto>, AppError> {
        let repo = GuildSettingsRepository::new(self.db);
        let settings = repo.find_by_guild_id(guild_id).await?;
        Ok(settings.map(GuildSettings::into_dto))
    }
}

/// Coerces the raw cooldown form value.
///
/// Missing, unparsable, and negative values become the default cooldown.
fn coerce_cooldown(cooldown: Option<&str>) -> i32 {
    cooldown
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .filter(|n| *n >= 0)
        .unwrap_or(DEFAULT_COOLDOWN)
}
