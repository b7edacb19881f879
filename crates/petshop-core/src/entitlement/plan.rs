use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PetShopError;

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    Free,
    Premium,
}

impl Plan {
    pub const ALL: [Plan; 2] = [Plan::Free, Plan::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Premium => "premium",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = PetShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Plan::Free),
            "premium" => Ok(Plan::Premium),
            other => Err(PetShopError::UnknownPlan(other.to_string())),
        }
    }
}

/// Billing state of a tenant's subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Trialing,
    PastDue,
    Canceled,
}

impl SubscriptionStatus {
    /// Whether the paid plan is honoured in this state.
    pub fn is_in_good_standing(self) -> bool {
        matches!(self, SubscriptionStatus::Active | SubscriptionStatus::Trialing)
    }
}

/// A company account. Its plan selector is the only input the resolver takes
/// from tenant data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub plan_type: Plan,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
}

impl Tenant {
    /// Plan the tenant is resolved under.
    ///
    /// A lapsed subscription (past due or canceled) falls back to `free`.
    pub fn effective_plan(&self) -> Plan {
        if self.subscription_status.is_in_good_standing() {
            self.plan_type
        } else {
            Plan::Free
        }
    }
}
