pub use super::blacklist_entry::Entity as BlacklistEntry;
pub use super::bot_stats::Entity as BotStats;
pub use super::guild_settings::Entity as GuildSettings;
