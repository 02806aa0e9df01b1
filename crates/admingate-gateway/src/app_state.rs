//! Shared application state for the AdminGate gateway.
//!
//! The allow-list is compiled once here, before the listener is bound, and is
//! read-only afterwards.

use std::sync::Arc;

use admingate_core::error::Result;

use crate::config::GatewayConfig;
use crate::policy::AdminPolicy;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    policy: Arc<AdminPolicy>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let allow_list = cfg.allow_list()?;
        let identity_header = cfg.gateway.identity_header_name()?;

        if allow_list.is_empty() {
            tracing::warn!("admin allow-list is empty; every caller will be denied");
        }
        tracing::info!(
            admins = allow_list.len(),
            identity_header = %identity_header,
            "admin policy compiled"
        );

        let policy = Arc::new(AdminPolicy::new(allow_list, identity_header));

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, policy }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn policy(&self) -> Arc<AdminPolicy> {
        Arc::clone(&self.inner.policy)
    }
}
