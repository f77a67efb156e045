use crate::server::{
    data::stats::BotStatsRepository, error::AppError, model::stats::UpsertBotStatsParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_bot_id;
mod upsert;
