use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Per-guild bot configuration saved by server owners.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
    /// Command cooldown in minutes.
    pub cooldown: i32,
    /// Discord channel ID for bot log messages. Empty when unset.
    pub log_channel_id: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
