//! Admin gate handlers.
//!
//! - `GET /v1/admin/authorize`: forward-auth probe for reverse proxies
//!   (204 when the caller is an admin, JSON rejection otherwise).
//! - `require_admin`: middleware for dashboard routes; inserts
//!   `AdminIdentity` into request extensions on success.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::context::AdminIdentity;
use crate::policy::{AdminPolicy, PolicyDecision};
use crate::transport::response::reject;

/// First value of the identity header; non-visible-ASCII values count as absent.
pub fn identity_from_headers<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn decide(policy: &AdminPolicy, email: Option<&str>, path: &str) -> PolicyDecision {
    let decision = policy.check(email);
    match &decision {
        PolicyDecision::Pass => {
            tracing::info!(%path, "admin access granted");
        }
        PolicyDecision::Reject { code, msg } => {
            tracing::warn!(%path, code = code.as_str(), reason = *msg, "admin access denied");
        }
    }
    tracing::debug!(%path, email = email.unwrap_or_default(), "admin identity evaluated");
    decision
}

pub async fn authorize(State(app): State<AppState>, headers: HeaderMap) -> Response {
    let policy = app.policy();
    let email = identity_from_headers(&headers, policy.identity_header());

    match decide(&policy, email, "/v1/admin/authorize") {
        PolicyDecision::Pass => StatusCode::NO_CONTENT.into_response(),
        PolicyDecision::Reject { code, msg } => reject(code, msg),
    }
}

pub async fn require_admin(State(app): State<AppState>, mut req: Request, next: Next) -> Response {
    let policy = app.policy();
    let email = identity_from_headers(req.headers(), policy.identity_header()).map(str::to_owned);

    let decision = decide(&policy, email.as_deref(), req.uri().path());
    if let PolicyDecision::Reject { code, msg } = decision {
        return reject(code, msg);
    }

    if let Some(email) = email {
        req.extensions_mut().insert(AdminIdentity::new(&email));
    }
    next.run(req).await
}
