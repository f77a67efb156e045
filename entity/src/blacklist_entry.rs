use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// A flagged Discord user ID with supporting moderation metadata.
///
/// At most one entry exists per `discord_id`; upserts replace all mutable
/// fields and refresh `date_added`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blacklist_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord ID of the blacklisted user, stored as a string.
    #[sea_orm(unique)]
    pub discord_id: String,
    /// Why the user was blacklisted.
    pub reason: String,
    /// Link to supporting evidence (screenshot, message link). Empty when none.
    pub evidence: String,
    /// Discord ID of the admin who placed the entry.
    pub admin_id: String,
    /// Number of reports backing the entry.
    pub reports: i32,
    pub date_added: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
