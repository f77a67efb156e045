//! Blacklist service for business logic.
//!
//! Applies the defaulting rules for new entries (fallback reason, empty
//! evidence, minimum report count) before handing them to the repository,
//! and shapes lookups into the DTOs the API returns.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::blacklist::BlacklistRepository,
    error::AppError,
    model::{
        api::{BlacklistEntryDto, SearchResultDto},
        blacklist::{BlacklistEntry, UpsertBlacklistParam},
    },
};

/// Fallback reason recorded when the admin gives none.
const DEFAULT_REASON: &str = "No reason provided.";

/// Number of recent entries shown on the admin overview.
const RECENT_ENTRIES_LIMIT: u64 = 5;

/// Fields an admin submits when adding a blacklist entry.
///
/// Optional fields carry the raw form values; defaults are applied by
/// `add()`, not by the caller.
pub struct AddBlacklistEntryParam {
    pub discord_id: u64,
    pub reason: Option<String>,
    pub evidence: Option<String>,
    pub reports: Option<String>,
    pub admin_id: u64,
}

pub struct BlacklistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlacklistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to the blacklist, replacing any existing entry.
    ///
    /// A missing or blank reason becomes the fallback reason, missing
    /// evidence becomes empty, and an unusable report count becomes 1. The
    /// acting admin is recorded on the entry and the entry's timestamp is
    /// set to now, whether created or replaced.
    ///
    /// # Returns
    /// - `Ok(BlacklistEntry)` - The stored entry after defaults were applied
    /// - `Err(AppError)` - Database error during upsert
    pub async fn add(&self, param: AddBlacklistEntryParam) -> Result<BlacklistEntry, AppError> {
        let repo = BlacklistRepository::new(self.db);

        let entry = repo
            .upsert(UpsertBlacklistParam {
                discord_id: param.discord_id,
                reason: coerce_reason(param.reason),
                evidence: param.evidence.unwrap_or_default(),
                reports: coerce_reports(param.reports.as_deref()),
                admin_id: param.admin_id,
            })
            .await?;

        Ok(entry)
    }

    /// Removes a user from the blacklist.
    ///
    /// Idempotent: removing an ID with no entry succeeds.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed or was already absent
    /// - `Err(AppError)` - Database error during delete
    pub async fn remove(&self, discord_id: u64) -> Result<(), AppError> {
        let repo = BlacklistRepository::new(self.db);
        repo.delete_by_discord_id(discord_id).await?;
        Ok(())
    }

    /// Lists the full blacklist, newest first.
    pub async fn list(&self) -> Result<Vec<BlacklistEntryDto>, AppError> {
        let repo = BlacklistRepository::new(self.db);
        let entries = repo.find_all().await?;
        Ok(entries.into_iter().map(BlacklistEntry::into_dto).collect())
    }

    /// Lists the most recently added entries for the admin overview.
    pub async fn recent(&self) -> Result<Vec<BlacklistEntryDto>, AppError> {
        let repo = BlacklistRepository::new(self.db);
        let entries = repo.find_recent(RECENT_ENTRIES_LIMIT).await?;
        Ok(entries.into_iter().map(BlacklistEntry::into_dto).collect())
    }

    /// Counts all blacklist entries.
    pub async fn count(&self) -> Result<u64, AppError> {
        let repo = BlacklistRepository::new(self.db);
        repo.count().await
    }

    /// Looks up a Discord ID for the public search box.
    ///
    /// A blacklisted ID returns its reason and date; anything else, including
    /// IDs that were never valid, reads as clean.
    ///
    /// # Returns
    /// - `Ok(SearchResultDto)` - Search outcome, never an error for absent IDs
    /// - `Err(AppError)` - Database error during lookup
    pub async fn search(&self, discord_id: u64) -> Result<SearchResultDto, AppError> {
        let repo = BlacklistRepository::new(self.db);

        let Some(entry) = repo.find_by_discord_id(discord_id).await? else {
            return Ok(SearchResultDto::clean());
        };

        Ok(SearchResultDto {
            blacklisted: true,
            reason: Some(entry.reason),
            date: Some(entry.date_added),
        })
    }
}

/// Applies the fallback reason to missing or blank input.
fn coerce_reason(reason: Option<String>) -> String {
    match reason {
        Some(reason) if !reason.trim().is_empty() => reason,
        _ => DEFAULT_REASON.to_string(),
    }
}

/// Coerces the raw report count form value.
///
/// Missing, unparsable, and zero values all become 1.
fn coerce_reports(reports: Option<&str>) -> i32 {
    reports
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .filter(|n| *n != 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    #[test]
    fn blank_reason_gets_fallback() {
        assert_eq!(coerce_reason(None), DEFAULT_REASON);
        assert_eq!(coerce_reason(Some("".to_string())), DEFAULT_REASON);
        assert_eq!(coerce_reason(Some("   ".to_string())), DEFAULT_REASON);
        assert_eq!(coerce_reason(Some("Spam".to_string())), "Spam");
    }

    #[test]
    fn unusable_report_counts_become_one() {
        assert_eq!(coerce_reports(None), 1);
        assert_eq!(coerce_reports(Some("")), 1);
        assert_eq!(coerce_reports(Some("abc")), 1);
        assert_eq!(coerce_reports(Some("0")), 1);
        assert_eq!(coerce_reports(Some("3")), 3);
        assert_eq!(coerce_reports(Some(" 7 ")), 7);
    }

    /// Tests that adding applies defaults before storage.
    ///
    /// Expected: Ok with fallback reason, empty evidence, one report
    #[tokio::test]
    async fn add_applies_defaults() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BlacklistEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = BlacklistService::new(db);
        let entry = service
            .add(AddBlacklistEntryParam {
                discord_id: 123456789,
                reason: None,
                evidence: None,
                reports: Some("not-a-number".to_string()),
                admin_id: 42,
            })
            .await?;

        assert_eq!(entry.reason, DEFAULT_REASON);
        assert_eq!(entry.evidence, "");
        assert_eq!(entry.reports, 1);
        assert_eq!(entry.admin_id, 42);

        Ok(())
    }

    /// Tests that removing an entry makes a subsequent search read clean.
    ///
    /// Expected: search flips from blacklisted to clean after removal
    #[tokio::test]
    async fn add_then_remove_reads_clean() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BlacklistEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = BlacklistService::new(db);
        service
            .add(AddBlacklistEntryParam {
                discord_id: 123456789,
                reason: Some("Spam".to_string()),
                evidence: None,
                reports: None,
                admin_id: 42,
            })
            .await?;
        assert!(service.search(123456789).await?.blacklisted);

        service.remove(123456789).await?;
        assert!(!service.search(123456789).await?.blacklisted);

        Ok(())
    }

    /// Tests the search outcomes for blacklisted and clean IDs.
    ///
    /// Expected: blacklisted entry carries reason and date, clean ID carries neither
    #[tokio::test]
    async fn search_reports_blacklist_status() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::BlacklistEntry)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        factory::blacklist_entry::BlacklistEntryFactory::new(db)
            .discord_id("123456789")
            .reason("Phishing")
            .build()
            .await?;

        let service = BlacklistService::new(db);

        let hit = service.search(123456789).await?;
        assert!(hit.blacklisted);
        assert_eq!(hit.reason, Some("Phishing".to_string()));
        assert!(hit.date.is_some());

        let miss = service.search(987654321).await?;
        assert!(!miss.blacklisted);
        assert!(miss.reason.is_none());
        assert!(miss.date.is_none());

        Ok(())
    }
}
