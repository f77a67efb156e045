//! DTOs returned by the JSON API surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Authenticated user as exposed to views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: u64,
    pub username: String,
    pub avatar: Option<String>,
}

/// Login view for unauthenticated visitors to the root route.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginViewDto {
    pub login_url: String,
}

/// Aggregate counters shown on the dashboard and admin views.
///
/// Falls back to zero values when the bot has not pushed stats yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsDto {
    pub blacklist_count: u64,
    pub server_count: String,
    pub latency: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardDto {
    pub user: UserDto,
    pub stats: StatsDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminDto {
    pub user: UserDto,
    pub stats: StatsDto,
    pub recent_blacklist: Vec<BlacklistEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlacklistEntryDto {
    pub discord_id: u64,
    pub reason: String,
    pub evidence: String,
    pub admin_id: u64,
    pub reports: i32,
    pub date_added: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlacklistViewDto {
    pub user: UserDto,
    pub blacklist: Vec<BlacklistEntryDto>,
}

/// Management view variant that echoes the success flag from the
/// post-redirect query string.
#[derive(Debug, Serialize, Deserialize)]
pub struct BlacklistManageDto {
    pub user: UserDto,
    pub blacklist: Vec<BlacklistEntryDto>,
    pub success: Option<String>,
}

/// Result of the public blacklist search box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub blacklisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl SearchResultDto {
    /// The response for an identifier with no blacklist entry.
    pub fn clean() -> Self {
        Self {
            blacklisted: false,
            reason: None,
            date: None,
        }
    }
}

/// One of the caller's manageable guilds, flagged with bot presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerDto {
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
    pub has_bot: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServersViewDto {
    pub user: UserDto,
    pub guilds: Vec<ServerDto>,
    pub invite_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildDto {
    pub id: u64,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildSettingsDto {
    pub guild_id: u64,
    pub cooldown: i32,
    pub log_channel_id: String,
    pub last_updated: DateTime<Utc>,
}

/// Per-guild settings page for a guild the caller may manage.
#[derive(Debug, Serialize, Deserialize)]
pub struct ManageViewDto {
    pub user: UserDto,
    pub guild: GuildDto,
    pub settings: Option<GuildSettingsDto>,
}

/// Machine-readable response of the stats ingestion endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateStatsResponse {
    pub success: bool,
}
