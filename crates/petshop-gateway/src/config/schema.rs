use std::collections::HashSet;
use std::net::SocketAddr;

use serde::Deserialize;

use petshop_core::entitlement::{Plan, SubscriptionStatus, Tenant};
use petshop_core::error::{PetShopError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PetShopConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub tenants: Vec<TenantConfig>,
}

impl PetShopConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PetShopError::UnsupportedVersion);
        }
        if self.tenants.is_empty() {
            return Err(PetShopError::BadRequest("tenants must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for t in &self.tenants {
            if t.id.trim().is_empty() {
                return Err(PetShopError::BadRequest("tenant id must not be empty".into()));
            }
            if !seen.insert(t.id.as_str()) {
                return Err(PetShopError::BadRequest(format!("duplicate tenant id: {}", t.id)));
            }
        }

        self.server.listen_addr()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            PetShopError::BadRequest(format!(
                "server.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantConfig {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub plan_type: Plan,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
}

impl TenantConfig {
    pub fn to_tenant(&self) -> Tenant {
        Tenant {
            id: self.id.clone(),
            name: self.name.clone().unwrap_or_else(|| self.id.clone()),
            plan_type: self.plan_type,
            subscription_status: self.subscription_status,
        }
    }
}
