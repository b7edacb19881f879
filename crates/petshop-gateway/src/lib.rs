//! petshop gateway library entry.
//!
//! Wires config, the tenant directory, the policy core and decision metrics
//! into an HTTP service that UI components and API routes query before they
//! act. It is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod error;
pub mod obs;
pub mod ops;
pub mod router;
pub mod routes;
