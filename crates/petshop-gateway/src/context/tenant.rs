use petshop_core::entitlement::{Entitlements, Plan, Tenant};
use petshop_core::error::{PetShopError, Result};

use crate::app_state::AppState;

/// Resolved tenant with the entitlements of its effective plan.
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub tenant: Tenant,
    pub entitlements: Entitlements,
}

impl TenantContext {
    pub fn new(tenant: Tenant) -> Self {
        let entitlements = Entitlements::for_plan(tenant.effective_plan());
        Self { tenant, entitlements }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant.id
    }
    pub fn plan(&self) -> Plan {
        self.entitlements.plan
    }
}

/// Resolve tenant context or return a client-visible error.
pub async fn resolve_tenant(state: &AppState, tenant_id: &str) -> Result<TenantContext> {
    state
        .directory()
        .lookup(tenant_id)
        .await?
        .map(TenantContext::new)
        .ok_or_else(|| PetShopError::UnknownTenant(tenant_id.to_string()))
}
