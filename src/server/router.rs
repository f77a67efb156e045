use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{callback, login, logout, root},
        blacklist::{add_entry, blacklist_manage, blacklist_view, remove_entry, search},
        dashboard::{admin, dashboard},
        guild::{manage, save_settings, servers},
        stats::update_stats,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/login", get(login))
        .route("/auth/discord/callback", get(callback))
        .route("/logout", get(logout))
        .route("/dashboard", get(dashboard))
        .route("/admin", get(admin))
        .route("/servers", get(servers))
        .route("/blacklist", get(blacklist_view))
        .route("/blacklist-manage", get(blacklist_manage))
        .route("/manage/{guild_id}", get(manage))
        .route("/api/search/{user_id}", get(search))
        .route("/api/blacklist/add", post(add_entry))
        .route("/api/blacklist/remove/{discord_id}", post(remove_entry))
        .route("/api/save-settings/{guild_id}", post(save_settings))
        .route("/api/bot/update-stats", post(update_stats))
}
