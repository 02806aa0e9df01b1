//! AdminGate gateway library entry.
//!
//! Wires config, the admin policy, and the HTTP guard into an axum router. It
//! is consumed by the binary (`main.rs`), by integration tests, and by
//! applications that want to put `require_admin` in front of their own
//! dashboard routes.

pub mod app_state;
pub mod config;
pub mod context;
pub mod ops;
pub mod policy;
pub mod router;
pub mod transport;
