//! AdminGate core: the admin allow-list check and the shared error surface.
//!
//! This crate holds the pure authorization predicate used by the gateway and
//! by any embedding application. It carries no transport or runtime
//! dependencies so it can be reused wherever an email needs to be checked
//! against the administrator allow-list.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! The check itself cannot fail; only allow-list construction returns
//! `AdminGateError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod allowlist;
pub mod error;

pub use allowlist::{normalize_email, AllowList};
/// Shared result type.
pub use error::{AdminGateError, Result};
