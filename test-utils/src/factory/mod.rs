//! Entity factories for creating test records with sensible defaults.
//!
//! Each factory provides a builder pattern over one entity so tests only
//! specify the fields they care about.

pub mod blacklist_entry;
pub mod bot_stats;
pub mod guild_settings;
mod helpers;
