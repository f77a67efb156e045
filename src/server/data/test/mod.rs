mod blacklist;
mod guild_settings;
mod stats;
