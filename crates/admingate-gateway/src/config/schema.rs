use std::net::SocketAddr;

use admingate_core::error::{AdminGateError, Result};
use admingate_core::AllowList;
use axum::http::HeaderName;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub admins: AdminsSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AdminGateError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.allow_list()?;

        Ok(())
    }

    /// Compile `admins.emails` into the runtime allow-list.
    pub fn allow_list(&self) -> Result<AllowList> {
        AllowList::new(self.admins.emails.iter().cloned())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Trusted header carrying the authenticated email, set by the upstream proxy.
    #[serde(default = "default_identity_header")]
    pub identity_header: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            identity_header: default_identity_header(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        self.identity_header_name()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            AdminGateError::BadRequest(format!(
                "gateway.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }

    pub fn identity_header_name(&self) -> Result<HeaderName> {
        HeaderName::from_bytes(self.identity_header.as_bytes()).map_err(|_| {
            AdminGateError::BadRequest(format!(
                "gateway.identity_header is not a valid header name: {}",
                self.identity_header
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_identity_header() -> String {
    "x-auth-request-email".into()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AdminsSection {
    #[serde(default)]
    pub emails: Vec<String>,
}
