use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Aggregate counters pushed by the bot process.
///
/// Exactly one live row per `bot_id`. `guild_ids` holds a JSON array of
/// guild ID strings; membership checks happen in application code.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "bot_stats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub bot_id: String,
    /// Bucketed display value, e.g. "60+".
    pub server_count: String,
    pub latency: String,
    /// JSON array of guild ID strings the bot is installed in.
    pub guild_ids: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
