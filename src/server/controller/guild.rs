use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::api::{ManageViewDto, ServersViewDto},
    service::guild::{GuildService, SaveGuildSettingsParam},
    state::AppState,
};

/// Form body for saving a guild's settings.
///
/// Both fields arrive as raw strings; coercion and defaulting happen in the
/// service.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSettingsForm {
    pub cooldown: Option<String>,
    pub log_channel_id: Option<String>,
}

/// GET /servers - the caller's manageable guilds with bot presence flags.
///
/// A session without a guild snapshot (stale session from before a format
/// change) is sent back through login to rebuild it.
pub async fn servers(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let user = guard.require(&[]).await?;

    let auth_session = AuthSession::new(&session);
    let Some(guilds) = auth_session.get_guilds().await? else {
        return Ok(Redirect::temporary("/login").into_response());
    };

    let service = GuildService::new(&state.db);
    let servers = service
        .servers_with_presence(&guilds, &state.config.bot_id)
        .await?;

    Ok(Json(ServersViewDto {
        user: user.into_dto(),
        guilds: servers,
        invite_url: state.config.bot_invite_url.clone(),
    })
    .into_response())
}

/// GET /manage/{guild_id} - settings view for a guild the caller manages.
///
/// Denied when the guild is not in the caller's manageable snapshot, and
/// not-found when the bot is not installed there.
pub async fn manage(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<Response, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let user = guard.require(&[]).await?;

    let auth_session = AuthSession::new(&session);
    let Some(guilds) = auth_session.get_guilds().await? else {
        return Ok(Redirect::temporary("/login").into_response());
    };

    let service = GuildService::new(&state.db);
    let guild = service
        .check_manage_access(&guilds, guild_id, &state.config.bot_id)
        .await?;
    let settings = service.settings(guild_id).await?;

    Ok(Json(ManageViewDto {
        user: user.into_dto(),
        guild,
        settings,
    })
    .into_response())
}

/// POST /api/save-settings/{guild_id} - saves a guild's settings.
///
/// Runs the same membership and presence checks as the manage view before
/// writing anything.
pub async fn save_settings(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Form(form): Form<SaveSettingsForm>,
) -> Result<Response, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    guard.require(&[]).await?;

    let auth_session = AuthSession::new(&session);
    let Some(guilds) = auth_session.get_guilds().await? else {
        return Ok(Redirect::temporary("/login").into_response());
    };

    let service = GuildService::new(&state.db);
    service
        .check_manage_access(&guilds, guild_id, &state.config.bot_id)
        .await?;

    service
        .save_settings(SaveGuildSettingsParam {
            guild_id,
            cooldown: form.cooldown,
            log_channel_id: form.log_channel_id,
        })
        .await?;

    Ok(Redirect::to(&format!("/manage/{}?success=true", guild_id)).into_response())
}
