//! Tenant context types shared across layers.
//!
//! Handlers never read tenant records directly: they go through a
//! `TenantDirectory` and work with the resolved `TenantContext`.

pub mod directory;
pub mod tenant;

pub use directory::{StaticTenantDirectory, TenantDirectory};
pub use tenant::{resolve_tenant, TenantContext};
