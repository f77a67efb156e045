//! Bot stats factory for creating test stats rows.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bot stats rows with customizable fields.
///
/// `guild_ids` is serialized to the JSON array-of-strings layout the
/// repository expects in the text column.
pub struct BotStatsFactory<'a> {
    db: &'a DatabaseConnection,
    bot_id: String,
    server_count: String,
    latency: String,
    guild_ids: Vec<String>,
    last_updated: chrono::DateTime<Utc>,
}

impl<'a> BotStatsFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - bot_id: `"guardbot"`
    /// - server_count: `"0+"`
    /// - latency: `"0ms"`
    /// - guild_ids: empty
    /// - last_updated: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            bot_id: "guardbot".to_string(),
            server_count: "0+".to_string(),
            latency: "0ms".to_string(),
            guild_ids: Vec::new(),
            last_updated: Utc::now(),
        }
    }

    pub fn bot_id(mut self, bot_id: impl Into<String>) -> Self {
        self.bot_id = bot_id.into();
        self
    }

    pub fn server_count(mut self, server_count: impl Into<String>) -> Self {
        self.server_count = server_count.into();
        self
    }

    pub fn latency(mut self, latency: impl Into<String>) -> Self {
        self.latency = latency.into();
        self
    }

    pub fn guild_ids(mut self, guild_ids: Vec<String>) -> Self {
        self.guild_ids = guild_ids;
        self
    }

    /// Builds and inserts the stats row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::bot_stats::Model)` - Created stats row
    /// - `Err(DbErr)` - Database error during insert or guild ID serialization
    pub async fn build(self) -> Result<entity::bot_stats::Model, DbErr> {
        let guild_ids = serde_json::to_string(&self.guild_ids)
            .map_err(|e| DbErr::Custom(format!("Failed to serialize guild_ids: {}", e)))?;

        entity::bot_stats::ActiveModel {
            bot_id: ActiveValue::Set(self.bot_id),
            server_count: ActiveValue::Set(self.server_count),
            latency: ActiveValue::Set(self.latency),
            guild_ids: ActiveValue::Set(guild_ids),
            last_updated: ActiveValue::Set(self.last_updated),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
