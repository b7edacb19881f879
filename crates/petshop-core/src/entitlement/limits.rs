//! Countable limits and the unlimited marker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PetShopError;

/// Upper bound on a countable resource.
///
/// `Unlimited` is a distinct variant, never a magic number: arithmetic only
/// ever happens on `Bounded` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    Bounded(u64),
    Unlimited,
}

impl Limit {
    pub fn is_unlimited(self) -> bool {
        matches!(self, Limit::Unlimited)
    }

    /// True when one more record fits on top of `current`.
    pub fn admits(self, current: u64) -> bool {
        match self {
            Limit::Unlimited => true,
            Limit::Bounded(max) => current < max,
        }
    }

    /// Headroom left above `current`, saturating at zero.
    pub fn remaining(self, current: u64) -> Limit {
        match self {
            Limit::Unlimited => Limit::Unlimited,
            Limit::Bounded(max) => Limit::Bounded(max.saturating_sub(current)),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Bounded(n) => write!(f, "{n}"),
            Limit::Unlimited => f.write_str("unlimited"),
        }
    }
}

const UNLIMITED: &str = "unlimited";

// wire form: a number, or the string "unlimited"
impl Serialize for Limit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Limit::Bounded(n) => serializer.serialize_u64(*n),
            Limit::Unlimited => serializer.serialize_str(UNLIMITED),
        }
    }
}

impl<'de> Deserialize<'de> for Limit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Count(u64),
            Word(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Count(n) => Ok(Limit::Bounded(n)),
            Repr::Word(w) if w == UNLIMITED => Ok(Limit::Unlimited),
            Repr::Word(w) => Err(serde::de::Error::custom(format!(
                "expected a count or \"{UNLIMITED}\", got \"{w}\""
            ))),
        }
    }
}

/// Per-plan record limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    pub max_clients: Limit,
    pub max_pets: Limit,
    pub max_users: Limit,
    pub max_photos: Limit,
}

impl PlanLimits {
    pub fn get(&self, resource: ResourceType) -> Limit {
        match resource {
            ResourceType::Clients => self.max_clients,
            ResourceType::Pets => self.max_pets,
            ResourceType::Users => self.max_users,
            ResourceType::Photos => self.max_photos,
        }
    }
}

/// Records a plan caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Clients,
    Pets,
    Users,
    Photos,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Clients,
        ResourceType::Pets,
        ResourceType::Users,
        ResourceType::Photos,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Clients => "clients",
            ResourceType::Pets => "pets",
            ResourceType::Users => "users",
            ResourceType::Photos => "photos",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = PetShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clients" => Ok(ResourceType::Clients),
            "pets" => Ok(ResourceType::Pets),
            "users" => Ok(ResourceType::Users),
            "photos" => Ok(ResourceType::Photos),
            other => Err(PetShopError::UnknownResource(other.to_string())),
        }
    }
}
