//! Plan table and the queries answered from it.

use serde::Serialize;

use crate::error::Result;

use super::features::{Feature, PlanFeatures};
use super::limits::{Limit, PlanLimits, ResourceType};
use super::plan::Plan;

struct PlanEntry {
    limits: PlanLimits,
    features: PlanFeatures,
}

static FREE: PlanEntry = PlanEntry {
    limits: PlanLimits {
        max_clients: Limit::Bounded(20),
        max_pets: Limit::Bounded(50),
        max_users: Limit::Bounded(1),
        max_photos: Limit::Bounded(0),
    },
    features: PlanFeatures {
        photos: false,
        whatsapp: false,
        reports: false,
        advanced: false,
    },
};

static PREMIUM: PlanEntry = PlanEntry {
    limits: PlanLimits {
        max_clients: Limit::Unlimited,
        max_pets: Limit::Unlimited,
        max_users: Limit::Unlimited,
        max_photos: Limit::Unlimited,
    },
    features: PlanFeatures {
        photos: true,
        whatsapp: true,
        reports: true,
        advanced: true,
    },
};

fn entry(plan: Plan) -> &'static PlanEntry {
    match plan {
        Plan::Free => &FREE,
        Plan::Premium => &PREMIUM,
    }
}

/// Limits of a plan.
pub fn limits_for(plan: Plan) -> PlanLimits {
    entry(plan).limits
}

/// Limits of a plan given by identifier; fails with `UnknownPlan`.
pub fn limits_for_id(plan: &str) -> Result<PlanLimits> {
    Ok(limits_for(plan.parse()?))
}

/// Whether `feature` is switched on for `plan`. Unknown names are denied.
pub fn can_access_feature(plan: Plan, feature: &str) -> bool {
    Feature::parse(feature)
        .map(|f| entry(plan).features.is_enabled(f))
        .unwrap_or(false)
}

/// Names of the features switched on for `plan`.
pub fn enabled_features(plan: Plan) -> Vec<Feature> {
    let features = &entry(plan).features;
    Feature::ALL
        .into_iter()
        .filter(|f| features.is_enabled(*f))
        .collect()
}

/// Outcome of a count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountCheck {
    pub current: u64,
    pub limit: Limit,
    pub can_add: bool,
    pub remaining: Limit,
}

/// Advisory check: may one more `resource` be added on top of `current`?
pub fn check_count_limit(plan: Plan, resource: ResourceType, current: u64) -> CountCheck {
    let limit = limits_for(plan).get(resource);
    CountCheck {
        current,
        limit,
        can_add: limit.admits(current),
        remaining: limit.remaining(current),
    }
}

/// Everything a plan grants, bundled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entitlements {
    pub plan: Plan,
    pub limits: PlanLimits,
    pub features: Vec<Feature>,
}

impl Entitlements {
    pub fn for_plan(plan: Plan) -> Self {
        Self {
            plan,
            limits: limits_for(plan),
            features: enabled_features(plan),
        }
    }

    pub fn can_access(&self, feature: &str) -> bool {
        can_access_feature(self.plan, feature)
    }

    pub fn check(&self, resource: ResourceType, current: u64) -> CountCheck {
        check_count_limit(self.plan, resource, current)
    }
}
