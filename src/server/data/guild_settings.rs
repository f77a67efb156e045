//! Guild settings data repository for database operations.
//!
//! Provides the `GuildSettingsRepository` for per-guild bot configuration.
//! Each guild has at most one settings row, keyed by guild ID.

use crate::server::{
    error::AppError,
    model::guild_settings::{GuildSettings, UpsertGuildSettingsParam},
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Repository providing database operations for guild settings.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new GuildSettingsRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a guild's settings from a parameter model.
    ///
    /// Creates the settings row on first save and overwrites both fields on
    /// every save after that, refreshing `last_updated`.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The saved settings
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertGuildSettingsParam) -> Result<GuildSettings, AppError> {
        let entity = entity::prelude::GuildSettings::insert(entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            cooldown: ActiveValue::Set(param.cooldown),
            log_channel_id: ActiveValue::Set(param.log_channel_id),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_settings::Column::GuildId)
                .update_columns([
                    entity::guild_settings::Column::Cooldown,
                    entity::guild_settings::Column::LogChannelId,
                    entity::guild_settings::Column::LastUpdated,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        GuildSettings::from_entity(entity)
    }

    /// Finds the settings row for a guild.
    ///
    /// # Returns
    /// - `Ok(Some(GuildSettings))` - Settings saved for this guild
    /// - `Ok(None)` - Guild has never been configured
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildSettings>, AppError> {
        let entity = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(GuildSettings::from_entity).transpose()
    }
}
