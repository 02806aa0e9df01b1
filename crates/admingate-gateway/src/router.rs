//! Axum router wiring.
//!
//! - `/healthz`             : liveness
//! - `/v1/admin/authorize`  : forward-auth probe
//! - `/v1/admin/whoami`     : admin-only, echoes the gated identity

use axum::{middleware, routing::get, Extension, Json, Router};
use serde_json::{json, Value};

use crate::context::AdminIdentity;
use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let admin = protect_admin(
        Router::new().route("/v1/admin/whoami", get(whoami)),
        state.clone(),
    );

    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/v1/admin/authorize", get(transport::guard::authorize))
        .merge(admin)
        .with_state(state)
}

/// Gate every route already added to `routes` behind the admin allow-list.
///
/// Uses `route_layer`, so call it after the routes are registered.
pub fn protect_admin<S>(routes: Router<S>, state: AppState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes.route_layer(middleware::from_fn_with_state(
        state,
        transport::guard::require_admin,
    ))
}

async fn whoami(Extension(identity): Extension<AdminIdentity>) -> Json<Value> {
    Json(json!({
        "email": identity.email(),
        "admin": true
    }))
}
