//! Top-level facade crate for petshop.
//!
//! Re-exports the policy core and the gateway library so users can depend on a single crate.

pub mod core {
    pub use petshop_core::*;
}

pub mod gateway {
    pub use petshop_gateway::*;
}
