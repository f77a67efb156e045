//! Bot statistics domain models and parameters.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::server::{
    error::{internal::InternalError, AppError},
    util::parse::parse_u64_from_string,
};

/// Aggregate counters the bot process last pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct BotStats {
    pub bot_id: String,
    /// Bucketed display value, e.g. "60+".
    pub server_count: String,
    pub latency: String,
    /// Guilds the bot is installed in, for membership checks.
    pub guild_ids: HashSet<u64>,
    pub last_updated: DateTime<Utc>,
}

impl BotStats {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// Decodes the JSON guild ID array stored in the text column and parses
    /// each ID into u64 for set-membership checks.
    ///
    /// # Returns
    /// - `Ok(BotStats)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr(_))` - Stored guild IDs were malformed
    pub fn from_entity(entity: entity::bot_stats::Model) -> Result<Self, AppError> {
        let guild_ids: Vec<String> = serde_json::from_str(&entity.guild_ids)
            .map_err(|e| InternalError::DecodeGuildIds { source: e })?;
        let guild_ids = guild_ids
            .into_iter()
            .map(parse_u64_from_string)
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self {
            bot_id: entity.bot_id,
            server_count: entity.server_count,
            latency: entity.latency,
            guild_ids,
            last_updated: entity.last_updated,
        })
    }

    /// Whether the bot reported itself installed in the given guild.
    pub fn has_guild(&self, guild_id: u64) -> bool {
        self.guild_ids.contains(&guild_id)
    }
}

/// Parameters for replacing the stats row of a bot.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertBotStatsParam {
    pub bot_id: String,
    /// Already-bucketed display value.
    pub server_count: String,
    pub latency: String,
    pub guild_ids: Vec<u64>,
}
