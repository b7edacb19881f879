use std::collections::HashMap;

use async_trait::async_trait;

use petshop_core::entitlement::Tenant;
use petshop_core::error::Result;

use crate::config::PetShopConfig;

/// Source of tenant records.
///
/// The managed backend owns tenant rows; an implementation backed by it only
/// needs to answer lookups by id.
#[async_trait]
pub trait TenantDirectory: Send + Sync {
    /// `Ok(None)` when the id is unknown.
    async fn lookup(&self, tenant_id: &str) -> Result<Option<Tenant>>;
}

/// Directory built once from config and never mutated.
#[derive(Debug, Default)]
pub struct StaticTenantDirectory {
    tenants: HashMap<String, Tenant>,
}

impl StaticTenantDirectory {
    pub fn from_config(cfg: &PetShopConfig) -> Self {
        let tenants = cfg
            .tenants
            .iter()
            .map(|t| (t.id.clone(), t.to_tenant()))
            .collect();
        Self { tenants }
    }

    pub fn tenants(&self) -> impl Iterator<Item = &Tenant> {
        self.tenants.values()
    }
}

#[async_trait]
impl TenantDirectory for StaticTenantDirectory {
    async fn lookup(&self, tenant_id: &str) -> Result<Option<Tenant>> {
        Ok(self.tenants.get(tenant_id).cloned())
    }
}
