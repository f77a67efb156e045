//! Blacklist data repository for database operations.
//!
//! Provides the `BlacklistRepository` for managing blacklist entries. Entries are
//! keyed by the blacklisted user's Discord ID; adding an ID that already exists
//! replaces the existing entry rather than creating a duplicate.

use crate::server::{
    error::AppError,
    model::blacklist::{BlacklistEntry, UpsertBlacklistParam},
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Repository providing database operations for the blacklist.
pub struct BlacklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistRepository<'a> {
    /// Creates a new BlacklistRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a blacklist entry from a parameter model.
    ///
    /// Inserts a new entry or fully replaces an existing one for the same
    /// Discord ID. On replace, every mutable column is overwritten with the
    /// incoming values, the acting admin is recorded, and `date_added` is
    /// refreshed to now. The upsert is a single atomic statement, so
    /// concurrent adds for the same ID cannot produce duplicates.
    ///
    /// # Arguments
    /// - `param` - Blacklist upsert parameters with defaults already applied
    ///
    /// # Returns
    /// - `Ok(BlacklistEntry)` - The created or replaced entry
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertBlacklistParam) -> Result<BlacklistEntry, AppError> {
        let entity = entity::prelude::BlacklistEntry::insert(entity::blacklist_entry::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id.to_string()),
            reason: ActiveValue::Set(param.reason),
            evidence: ActiveValue::Set(param.evidence),
            admin_id: ActiveValue::Set(param.admin_id.to_string()),
            reports: ActiveValue::Set(param.reports),
            date_added: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::blacklist_entry::Column::DiscordId)
                .update_columns([
                    entity::blacklist_entry::Column::Reason,
                    entity::blacklist_entry::Column::Evidence,
                    entity::blacklist_entry::Column::AdminId,
                    entity::blacklist_entry::Column::Reports,
                    entity::blacklist_entry::Column::DateAdded,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        BlacklistEntry::from_entity(entity)
    }

    /// Deletes a blacklist entry by the blacklisted user's Discord ID.
    ///
    /// Removal is idempotent: deleting an ID with no entry succeeds and
    /// reports zero rows affected.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted (0 or 1)
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete_by_discord_id(&self, discord_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::BlacklistEntry::delete_many()
            .filter(entity::blacklist_entry::Column::DiscordId.eq(discord_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets all blacklist entries, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<BlacklistEntry>)` - All entries ordered by date added descending
    /// - `Err(AppError)` - Database error during query
    pub async fn find_all(&self) -> Result<Vec<BlacklistEntry>, AppError> {
        let entities = entity::prelude::BlacklistEntry::find()
            .order_by_desc(entity::blacklist_entry::Column::DateAdded)
            .all(self.db)
            .await?;

        entities.into_iter().map(BlacklistEntry::from_entity).collect()
    }

    /// Gets the most recently added blacklist entries.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of entries to return
    ///
    /// # Returns
    /// - `Ok(Vec<BlacklistEntry>)` - Up to `limit` entries, newest first
    /// - `Err(AppError)` - Database error during query
    pub async fn find_recent(&self, limit: u64) -> Result<Vec<BlacklistEntry>, AppError> {
        let entities = entity::prelude::BlacklistEntry::find()
            .order_by_desc(entity::blacklist_entry::Column::DateAdded)
            .limit(limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(BlacklistEntry::from_entity).collect()
    }

    /// Finds a blacklist entry by the blacklisted user's Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(BlacklistEntry))` - Entry found
    /// - `Ok(None)` - No entry for that Discord ID
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_discord_id(
        &self,
        discord_id: u64,
    ) -> Result<Option<BlacklistEntry>, AppError> {
        let entity = entity::prelude::BlacklistEntry::find()
            .filter(entity::blacklist_entry::Column::DiscordId.eq(discord_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(BlacklistEntry::from_entity).transpose()
    }

    /// Counts all blacklist entries.
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of entries
    /// - `Err(AppError)` - Database error during count query
    pub async fn count(&self) -> Result<u64, AppError> {
        let count = entity::prelude::BlacklistEntry::find()
            .count(self.db)
            .await?;

        Ok(count)
    }
}
