//! Blacklist entry factory for creating test blacklist records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blacklist entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::blacklist_entry::BlacklistEntryFactory;
///
/// let entry = BlacklistEntryFactory::new(&db)
///     .discord_id("123456789")
///     .reason("Scam links")
///     .reports(3)
///     .build()
///     .await?;
/// ```
pub struct BlacklistEntryFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    reason: String,
    evidence: String,
    admin_id: String,
    reports: i32,
    date_added: chrono::DateTime<Utc>,
}

impl<'a> BlacklistEntryFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented numeric string
    /// - reason: `"No reason provided."`
    /// - evidence: `""`
    /// - admin_id: `"1"`
    /// - reports: `1`
    /// - date_added: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            reason: "No reason provided.".to_string(),
            evidence: String::new(),
            admin_id: "1".to_string(),
            reports: 1,
            date_added: Utc::now(),
        }
    }

    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }

    pub fn admin_id(mut self, admin_id: impl Into<String>) -> Self {
        self.admin_id = admin_id.into();
        self
    }

    pub fn reports(mut self, reports: i32) -> Self {
        self.reports = reports;
        self
    }

    pub fn date_added(mut self, date_added: chrono::DateTime<Utc>) -> Self {
        self.date_added = date_added;
        self
    }

    /// Builds and inserts the blacklist entry into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blacklist_entry::Model)` - Created entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::blacklist_entry::Model, DbErr> {
        entity::blacklist_entry::ActiveModel {
            discord_id: ActiveValue::Set(self.discord_id),
            reason: ActiveValue::Set(self.reason),
            evidence: ActiveValue::Set(self.evidence),
            admin_id: ActiveValue::Set(self.admin_id),
            reports: ActiveValue::Set(self.reports),
            date_added: ActiveValue::Set(self.date_added),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blacklist entry with default values.
pub async fn create_blacklist_entry(
    db: &DatabaseConnection,
) -> Result<entity::blacklist_entry::Model, DbErr> {
    BlacklistEntryFactory::new(db).build().await
}
