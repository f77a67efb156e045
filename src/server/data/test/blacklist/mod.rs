use crate::server::{
    data::blacklist::BlacklistRepository, error::AppError, model::blacklist::UpsertBlacklistParam,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod delete_by_discord_id;
mod find_all;
mod find_by_discord_id;
mod find_recent;
mod upsert;

/// Upsert parameters with typical values for a single entry.
fn param_for(discord_id: u64) -> UpsertBlacklistParam {
    UpsertBlacklistParam {
        discord_id,
        reason: "Scam links".to_string(),
        evidence: "https://example.com/evidence".to_string(),
        reports: 3,
        admin_id: 42,
    }
}
