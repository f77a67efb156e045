use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlacklistEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(BlacklistEntry::Id))
                    .col(string_uniq(BlacklistEntry::DiscordId))
                    .col(string(BlacklistEntry::Reason))
                    .col(string(BlacklistEntry::Evidence))
                    .col(string(BlacklistEntry::AdminId))
                    .col(integer(BlacklistEntry::Reports))
                    .col(timestamp_with_time_zone(BlacklistEntry::DateAdded))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlacklistEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlacklistEntry {
    Table,
    Id,
    DiscordId,
    Reason,
    Evidence,
    AdminId,
    Reports,
    DateAdded,
}
