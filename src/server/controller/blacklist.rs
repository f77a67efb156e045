use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::api::{BlacklistManageDto, BlacklistViewDto, SearchResultDto},
    service::blacklist::{AddBlacklistEntryParam, BlacklistService},
    state::AppState,
};

/// Query parameters echoed back on the manage view after a redirect.
#[derive(Deserialize)]
pub struct ManageParams {
    pub success: Option<String>,
}

/// Form body for adding a blacklist entry.
///
/// `discord_id` arrives as a string because Discord snowflakes overflow
/// JavaScript number precision; it is parsed and validated here.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEntryForm {
    pub discord_id: String,
    pub reason: Option<String>,
    pub evidence: Option<String>,
    pub reports: Option<String>,
}

/// GET /blacklist - read-only blacklist view for any logged-in user.
pub async fn blacklist_view(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let user = guard.require(&[]).await?;

    let service = BlacklistService::new(&state.db);
    let blacklist = service.list().await?;

    Ok(Json(BlacklistViewDto {
        user: user.into_dto(),
        blacklist,
    }))
}

/// GET /blacklist-manage - admin management view.
///
/// Echoes the `success` flag from the post-action redirect so the client can
/// surface a confirmation.
pub async fn blacklist_manage(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ManageParams>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let user = guard.require(&[Permission::Admin]).await?;

    let service = BlacklistService::new(&state.db);
    let blacklist = service.list().await?;

    Ok(Json(BlacklistManageDto {
        user: user.into_dto(),
        blacklist,
        success: params.success,
    }))
}

/// POST /api/blacklist/add - adds or replaces a blacklist entry.
///
/// The acting admin is recorded on the entry. A non-numeric Discord ID is a
/// 400; defaulting of the remaining fields happens in the service.
pub async fn add_entry(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddEntryForm>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let admin = guard.require(&[Permission::Admin]).await?;

    let discord_id = form.discord_id.trim().parse::<u64>().map_err(|_| {
        AppError::BadRequest(format!("'{}' is not a valid Discord ID", form.discord_id))
    })?;

    let service = BlacklistService::new(&state.db);
    service
        .add(AddBlacklistEntryParam {
            discord_id,
            reason: form.reason,
            evidence: form.evidence,
            reports: form.reports,
            admin_id: admin.id,
        })
        .await?;

    Ok(Redirect::to("/blacklist-manage?success=added"))
}

/// POST /api/blacklist/remove/{discord_id} - removes a blacklist entry.
///
/// Idempotent: removing an absent ID still redirects with the success flag.
pub async fn remove_entry(
    State(state): State<AppState>,
    session: Session,
    Path(discord_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    guard.require(&[Permission::Admin]).await?;

    let service = BlacklistService::new(&state.db);
    service.remove(discord_id).await?;

    Ok(Redirect::to("/blacklist-manage?success=removed"))
}

/// GET /api/search/{user_id} - public blacklist search for logged-in users.
///
/// Non-numeric input reads as clean rather than erroring, so the search box
/// never leaks whether an identifier was even plausible.
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    guard.require(&[]).await?;

    let Ok(discord_id) = user_id.trim().parse::<u64>() else {
        return Ok(Json(SearchResultDto::clean()).into_response());
    };

    let service = BlacklistService::new(&state.db);
    let result = service.search(discord_id).await?;

    Ok(Json(result).into_response())
}
