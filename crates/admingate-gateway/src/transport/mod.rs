//! Transport layer (HTTP).
//!
//! Exposes the forward-auth endpoint and the `require_admin` middleware. Both
//! read the caller's email from the trusted identity header and defer the
//! decision to the policy layer.

pub mod guard;
pub mod response;
