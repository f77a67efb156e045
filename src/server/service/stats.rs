//! Bot statistics service for business logic.
//!
//! Handles stats ingestion from the bot process and the aggregate overview
//! shown on dashboard views. Raw server counts are bucketed to a milestone
//! display value at ingestion time; the exact count is never stored.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{blacklist::BlacklistRepository, stats::BotStatsRepository},
    error::AppError,
    model::{
        api::StatsDto,
        stats::{BotStats, UpsertBotStatsParam},
    },
};

/// Counters pushed by the bot process, already validated by the controller.
pub struct IngestStatsParam {
    pub bot_id: String,
    pub server_count: u64,
    pub latency: String,
    pub guild_ids: Vec<u64>,
}

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a stats push from the bot process.
    ///
    /// The raw server count is bucketed down to its milestone display value
    /// before storage. Each push fully replaces the bot's previous counters
    /// and guild list.
    ///
    /// # Returns
    /// - `Ok(BotStats)` - The stored stats
    /// - `Err(AppError)` - Database error during upsert
    pub async fn ingest(&self, param: IngestStatsParam) -> Result<BotStats, AppError> {
        let repo = BotStatsRepository::new(self.db);

        let stats = repo
            .upsert(UpsertBotStatsParam {
                bot_id: param.bot_id,
                server_count: milestone_display(param.server_count),
                latency: param.latency,
                guild_ids: param.guild_ids,
            })
            .await?;

        Ok(stats)
    }

    /// Builds the aggregate counters for dashboard views.
    ///
    /// Combines the live blacklist count with the bot's last pushed stats.
    /// When the bot has never pushed, the counters fall back to zero values
    /// rather than failing the view.
    ///
    /// # Returns
    /// - `Ok(StatsDto)` - Counters, with zero fallbacks if no push yet
    /// - `Err(AppError)` - Database error during lookup
    pub async fn overview(&self, bot_id: &str) -> Result<StatsDto, AppError> {
        let blacklist_repo = BlacklistRepository::new(self.db);
        let stats_repo = BotStatsRepository::new(self.db);

        let blacklist_count = blacklist_repo.count().await?;
        let stats = stats_repo.find_by_bot_id(bot_id).await?;

        Ok(match stats {
            Some(stats) => StatsDto {
                blacklist_count,
                server_count: stats.server_count,
                latency: stats.latency,
            },
            None => StatsDto {
                blacklist_count,
                server_count: "0+".to_string(),
                latency: "0ms".to_string(),
            },
        })
    }

    /// Fetches the bot's last pushed stats, if any.
    pub async fn find(&self, bot_id: &str) -> Result<Option<BotStats>, AppError> {
        let repo = BotStatsRepository::new(self.db);
        repo.find_by_bot_id(bot_id).await
    }
}

/// Buckets a raw server count down to its public milestone value.
///
/// Counts are floored to the nearest multiple of ten and suffixed with "+",
/// so 67 servers display as "60+" and anything under ten as "0+".
fn milestone_display(server_count: u64) -> String {
    format!("{}+", server_count / 10 * 10)
}
