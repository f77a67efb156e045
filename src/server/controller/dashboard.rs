use axum::{extract::State, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::api::{AdminDto, DashboardDto},
    service::{blacklist::BlacklistService, stats::StatsService},
    state::AppState,
};

/// GET /dashboard - general overview for any logged-in user.
///
/// Shows the aggregate counters; falls back to zero values when the bot has
/// not pushed stats yet.
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let user = guard.require(&[]).await?;

    let stats_service = StatsService::new(&state.db);
    let stats = stats_service.overview(&state.config.bot_id).await?;

    Ok(Json(DashboardDto {
        user: user.into_dto(),
        stats,
    }))
}

/// GET /admin - admin overview.
///
/// Adds the five most recent blacklist entries on top of the aggregate
/// counters. Non-admins are redirected to the general dashboard by the
/// guard.
pub async fn admin(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&session, &state.config.admin_user_ids);
    let user = guard.require(&[Permission::Admin]).await?;

    let stats_service = StatsService::new(&state.db);
    let blacklist_service = BlacklistService::new(&state.db);

    let stats = stats_service.overview(&state.config.bot_id).await?;
    let recent_blacklist = blacklist_service.recent().await?;

    Ok(Json(AdminDto {
        user: user.into_dto(),
        stats,
        recent_blacklist,
    }))
}
