//! JSON rejection bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use admingate_core::error::ClientCode;

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest | ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
        ClientCode::AuthFailed => StatusCode::UNAUTHORIZED,
        ClientCode::NotAllowed => StatusCode::FORBIDDEN,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `{"code": "...", "msg": "..."}` with the status matching `code`.
pub fn reject(code: ClientCode, msg: &str) -> Response {
    let body = json!({
        "code": code.as_str(),
        "msg": msg
    });
    (status_for(code), Json(body)).into_response()
}

