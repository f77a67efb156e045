//! Guild settings domain models and parameters.

use chrono::{DateTime, Utc};

use crate::server::{
    error::AppError, model::api::GuildSettingsDto, util::parse::parse_u64_from_string,
};

/// Per-guild bot configuration saved by a server owner.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub guild_id: u64,
    /// Command cooldown in minutes, never negative.
    pub cooldown: i32,
    /// Channel the bot logs to. Empty when unset.
    pub log_channel_id: String,
    pub last_updated: DateTime<Utc>,
}

impl GuildSettings {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: parse_u64_from_string(entity.guild_id)?,
            cooldown: entity.cooldown,
            log_channel_id: entity.log_channel_id,
            last_updated: entity.last_updated,
        })
    }

    pub fn into_dto(self) -> GuildSettingsDto {
        GuildSettingsDto {
            guild_id: self.guild_id,
            cooldown: self.cooldown,
            log_channel_id: self.log_channel_id,
            last_updated: self.last_updated,
        }
    }
}

/// Parameters for upserting a guild's settings.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertGuildSettingsParam {
    pub guild_id: u64,
    pub cooldown: i32,
    pub log_channel_id: String,
}
