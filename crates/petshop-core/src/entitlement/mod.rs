//! Entitlement resolver.
//!
//! A tenant's subscription plan decides how many clients, pets, users and
//! photos it may keep and which optional features it can use. The plan table
//! is fixed at compile time; only the tenant's plan selector varies per call.
//!
//! Count checks are advisory: they read a caller-supplied count and decide.
//! Callers that create records must re-validate at write time, since two
//! concurrent requests can both pass a check before either write commits.

pub mod features;
pub mod limits;
pub mod plan;
pub mod resolver;

pub use features::{Feature, PlanFeatures};
pub use limits::{Limit, PlanLimits, ResourceType};
pub use plan::{Plan, SubscriptionStatus, Tenant};
pub use resolver::{
    can_access_feature, check_count_limit, enabled_features, limits_for, limits_for_id,
    CountCheck, Entitlements,
};
