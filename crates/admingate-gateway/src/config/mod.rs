//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use admingate_core::error::{AdminGateError, Result};
use admingate_core::AllowList;

pub use schema::{AdminsSection, GatewayConfig, GatewaySection};

/// Env var that selects the config file.
pub const CONFIG_PATH_ENV: &str = "ADMINGATE_CONFIG";
/// Env var whose comma-separated value replaces `admins.emails`.
pub const ADMIN_EMAILS_ENV: &str = "ADMINGATE_ADMIN_EMAILS";

pub const DEFAULT_CONFIG_PATH: &str = "admingate.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| AdminGateError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| AdminGateError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Replace the admin list with `admin_emails` (comma-separated) when present.
///
/// Lets operators rotate admins without touching the config file. `cfg` is
/// only modified when the new list is valid.
pub fn apply_env_overrides(cfg: &mut GatewayConfig, admin_emails: Option<&str>) -> Result<()> {
    let Some(raw) = admin_emails else {
        return Ok(());
    };

    let emails: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    AllowList::new(emails.iter().cloned()).map_err(|e| match e {
        AdminGateError::BadRequest(detail) => {
            AdminGateError::BadRequest(format!("{ADMIN_EMAILS_ENV}: {detail}"))
        }
        other => other,
    })?;

    cfg.admins.emails = emails;
    Ok(())
}
