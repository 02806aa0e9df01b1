//! Shared error type across AdminGate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed configuration.
    BadRequest,
    /// No caller identity was presented.
    AuthFailed,
    /// Caller identity is not on the admin allow-list.
    NotAllowed,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::AuthFailed => "AUTH_FAILED",
            ClientCode::NotAllowed => "NOT_ALLOWED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AdminGateError>;

/// Unified error type used by core and gateway.
///
/// Access denials are not errors; the gateway policy reports them as
/// `ClientCode::AuthFailed` / `ClientCode::NotAllowed` decisions.
#[derive(Debug, Error)]
pub enum AdminGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl AdminGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            AdminGateError::BadRequest(_) => ClientCode::BadRequest,
            AdminGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            AdminGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
