//! Bot statistics data repository for database operations.
//!
//! Provides the `BotStatsRepository` for the single stats row each bot maintains.
//! Guild ID lists are stored as a JSON array of strings in a text column and
//! encoded/decoded at this boundary.

use crate::server::{
    error::{internal::InternalError, AppError},
    model::stats::{BotStats, UpsertBotStatsParam},
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

/// Repository providing database operations for bot statistics.
pub struct BotStatsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotStatsRepository<'a> {
    /// Creates a new BotStatsRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts the stats row for a bot from a parameter model.
    ///
    /// Inserts the row on first push and replaces its counters on every push
    /// after that, keyed by bot ID. The replace is a single atomic statement,
    /// so a reader never observes a missing row between pushes and concurrent
    /// pushes leave exactly one row (last write wins).
    ///
    /// # Returns
    /// - `Ok(BotStats)` - The stored stats after the push
    /// - `Err(AppError)` - Database error or guild ID encoding failure
    pub async fn upsert(&self, param: UpsertBotStatsParam) -> Result<BotStats, AppError> {
        let guild_ids: Vec<String> = param.guild_ids.iter().map(|id| id.to_string()).collect();
        let guild_ids = serde_json::to_string(&guild_ids)
            .map_err(|e| InternalError::EncodeGuildIds { source: e })?;

        let entity = entity::prelude::BotStats::insert(entity::bot_stats::ActiveModel {
            bot_id: ActiveValue::Set(param.bot_id),
            server_count: ActiveValue::Set(param.server_count),
            latency: ActiveValue::Set(param.latency),
            guild_ids: ActiveValue::Set(guild_ids),
            last_updated: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::bot_stats::Column::BotId)
                .update_columns([
                    entity::bot_stats::Column::ServerCount,
                    entity::bot_stats::Column::Latency,
                    entity::bot_stats::Column::GuildIds,
                    entity::bot_stats::Column::LastUpdated,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        BotStats::from_entity(entity)
    }

    /// Finds the stats row for a bot.
    ///
    /// # Returns
    /// - `Ok(Some(BotStats))` - The bot has pushed stats at least once
    /// - `Ok(None)` - No stats pushed yet
    /// - `Err(AppError)` - Database error or corrupt stored guild ID list
    pub async fn find_by_bot_id(&self, bot_id: &str) -> Result<Option<BotStats>, AppError> {
        let entity = entity::prelude::BotStats::find()
            .filter(entity::bot_stats::Column::BotId.eq(bot_id))
            .one(self.db)
            .await?;

        entity.map(BotStats::from_entity).transpose()
    }
}
