use crate::server::{
    data::guild_settings::GuildSettingsRepository, error::AppError,
    model::guild_settings::UpsertGuildSettingsParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod upsert;
