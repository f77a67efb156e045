pub mod prelude;

pub mod blacklist_entry;
pub mod bot_stats;
pub mod guild_settings;
