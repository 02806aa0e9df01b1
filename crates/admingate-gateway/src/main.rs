//! AdminGate gateway
//!
//! - Strict YAML config (`ADMINGATE_CONFIG`, default `admingate.yaml`)
//! - `ADMINGATE_ADMIN_EMAILS` overrides the admin list at boot
//! - Forward-auth endpoint + admin-gated routes

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

use admingate_core::error::{AdminGateError, Result};
use admingate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = env::var(config::CONFIG_PATH_ENV)
        .unwrap_or_else(|_| config::DEFAULT_CONFIG_PATH.to_string());
    let mut cfg = config::load_from_file(&path)?;

    let override_emails = env::var(config::ADMIN_EMAILS_ENV).ok();
    if override_emails.is_some() {
        tracing::info!(var = config::ADMIN_EMAILS_ENV, "admin list overridden from environment");
    }
    config::apply_env_overrides(&mut cfg, override_emails.as_deref())?;

    let listen = cfg.gateway.listen_addr()?;
    let state = app_state::AppState::new(cfg)?;
    let app = router::build_router(state);

    tracing::info!(%listen, config = %path, "admingate-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| AdminGateError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AdminGateError::Internal(format!("server failed: {e}")))
}
