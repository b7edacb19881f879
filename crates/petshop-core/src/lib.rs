//! petshop core: plan entitlements and appointment status rules.
//!
//! This crate holds the policy tables the pet-shop application consults before
//! it lets a tenant add records, use a feature, or move an appointment to a new
//! status. Everything here is a pure function over static tables, so it carries
//! no transport or runtime dependencies and can be called from any number of
//! request handlers at once.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Every rejected decision surfaces as a `PetShopError` so a bad request never
//! takes a process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod appointment;
pub mod entitlement;
pub mod error;

/// Shared result type.
pub use error::{Result, PetShopError};
