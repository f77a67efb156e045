use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::server::{
    error::AppError,
    model::api::UpdateStatsResponse,
    service::stats::{IngestStatsParam, StatsService},
    state::AppState,
    util::parse::parse_u64_from_string,
};

/// Header carrying the shared ingestion secret.
const BOT_SECRET_HEADER: &str = "x-bot-secret";

/// JSON body the bot process pushes.
///
/// Guild IDs arrive as strings because snowflakes overflow JavaScript number
/// precision. A missing bot ID falls back to the configured one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatsBody {
    pub bot_id: Option<String>,
    pub server_count: u64,
    pub latency: String,
    #[serde(default)]
    pub guild_ids: Vec<String>,
}

/// POST /api/bot/update-stats - stats ingestion from the bot process.
///
/// The shared secret is checked before the body is looked at; a missing or
/// wrong secret is a 403 with no detail and no stored-row mutation. On
/// success the bot's stats row is atomically replaced.
pub async fn update_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<UpdateStatsBody>,
) -> Result<Response, AppError> {
    if !secret_matches(&headers, &state.config.bot_update_secret) {
        tracing::warn!("stats push rejected: bad or missing ingestion secret");
        return Ok((
            StatusCode::FORBIDDEN,
            Json(UpdateStatsResponse { success: false }),
        )
            .into_response());
    }

    let guild_ids = body
        .guild_ids
        .into_iter()
        .map(parse_u64_from_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| AppError::BadRequest("guildIds must be numeric strings".to_string()))?;

    let service = StatsService::new(&state.db);
    service
        .ingest(IngestStatsParam {
            bot_id: body
                .bot_id
                .unwrap_or_else(|| state.config.bot_id.clone()),
            server_count: body.server_count,
            latency: body.latency,
            guild_ids,
        })
        .await?;

    Ok(Json(UpdateStatsResponse { success: true }).into_response())
}

/// Whether the request carries the expected ingestion secret.
fn secret_matches(headers: &HeaderMap, expected: &str) -> bool {
    headers
        .get(BOT_SECRET_HEADER)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected)
}
