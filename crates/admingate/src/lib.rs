//! Top-level facade crate for AdminGate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use admingate_core::*;
}

pub mod gateway {
    pub use admingate_gateway::*;
}
