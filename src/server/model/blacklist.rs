//! Blacklist domain models and parameters.

use chrono::{DateTime, Utc};

use crate::server::{
    error::AppError, model::api::BlacklistEntryDto, util::parse::parse_u64_from_string,
};

/// A flagged Discord user with supporting moderation metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct BlacklistEntry {
    /// Discord ID of the blacklisted user.
    pub discord_id: u64,
    /// Why the user was blacklisted.
    pub reason: String,
    /// Link to supporting evidence. Empty when none was given.
    pub evidence: String,
    /// Discord ID of the admin who placed the entry.
    pub admin_id: u64,
    /// Number of reports backing the entry.
    pub reports: i32,
    /// When the entry was added or last replaced.
    pub date_added: DateTime<Utc>,
}

impl BlacklistEntry {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(BlacklistEntry)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored ID failed to parse as u64
    pub fn from_entity(entity: entity::blacklist_entry::Model) -> Result<Self, AppError> {
        Ok(Self {
            discord_id: parse_u64_from_string(entity.discord_id)?,
            reason: entity.reason,
            evidence: entity.evidence,
            admin_id: parse_u64_from_string(entity.admin_id)?,
            reports: entity.reports,
            date_added: entity.date_added,
        })
    }

    pub fn into_dto(self) -> BlacklistEntryDto {
        BlacklistEntryDto {
            discord_id: self.discord_id,
            reason: self.reason,
            evidence: self.evidence,
            admin_id: self.admin_id,
            reports: self.reports,
            date_added: self.date_added,
        }
    }
}

/// Parameters for upserting a blacklist entry.
///
/// An upsert replaces every mutable field of an existing entry and refreshes
/// `date_added`; it is a replace, not a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertBlacklistParam {
    pub discord_id: u64,
    pub reason: String,
    pub evidence: String,
    pub reports: i32,
    /// The acting admin, recorded on the entry.
    pub admin_id: u64,
}
