//! Guild settings factory for creating test settings rows.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings rows with customizable fields.
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    cooldown: i32,
    log_channel_id: String,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - cooldown: `1`
    /// - log_channel_id: `""`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            cooldown: 1,
            log_channel_id: String::new(),
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn cooldown(mut self, cooldown: i32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn log_channel_id(mut self, log_channel_id: impl Into<String>) -> Self {
        self.log_channel_id = log_channel_id.into();
        self
    }

    /// Builds and inserts the settings row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_settings::Model)` - Created settings row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            cooldown: ActiveValue::Set(self.cooldown),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
