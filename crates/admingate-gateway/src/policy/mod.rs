//! Policy layer (admin allow-list gate).
//!
//! Wraps the compiled allow-list into a decision the transport layer can map
//! onto an HTTP response.

pub mod engine;

pub use engine::{AdminPolicy, PolicyDecision};
