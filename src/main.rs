mod app;
mod appointments;
mod auth;
mod catalog;
mod config;
mod db;
mod error;
mod state;
mod views;

use crate::auth::services::bootstrap_admin;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "clinic_admin=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let app_state = AppState::init().await?;
    bootstrap_admin(&app_state.db, &app_state.config.admin).await?;

    let config = app_state.config.clone();
    app::serve(app::build_app(app_state), &config).await
}
