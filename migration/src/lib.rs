pub use sea_orm_migration::prelude::*;

mod m20260210_000001_create_blacklist_entry_table;
mod m20260210_000002_create_bot_stats_table;
mod m20260210_000003_create_guild_settings_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260210_000001_create_blacklist_entry_table::Migration),
            Box::new(m20260210_000002_create_bot_stats_table::Migration),
            Box::new(m20260210_000003_create_guild_settings_table::Migration),
        ]
    }
}
