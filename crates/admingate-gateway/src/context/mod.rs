//! Request context types shared across layers.
//!
//! The admin guard attaches an `AdminIdentity` to requests it lets through so
//! downstream dashboard handlers can read who the caller is without
//! re-parsing headers.

pub mod identity;

pub use identity::AdminIdentity;
