//! Shared application state for the petshop gateway.
//!
//! Built once at startup from config, then cloned into every handler. Nothing
//! in here is mutated after construction except metric counters.

use std::sync::Arc;

use crate::config::PetShopConfig;
use crate::context::{StaticTenantDirectory, TenantDirectory};
use crate::obs::metrics::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: PetShopConfig,
    directory: Arc<dyn TenantDirectory>,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build application state with the config-backed tenant directory.
    pub fn new(cfg: PetShopConfig) -> Self {
        let directory = StaticTenantDirectory::from_config(&cfg);

        for t in directory.tenants() {
            let effective = t.effective_plan();
            if effective != t.plan_type {
                tracing::warn!(
                    tenant = %t.id,
                    plan = %t.plan_type,
                    effective = %effective,
                    status = ?t.subscription_status,
                    "subscription not in good standing; tenant resolved under a lower plan"
                );
            }
        }

        Self::with_directory(cfg, Arc::new(directory))
    }

    /// Build application state over any tenant source.
    pub fn with_directory(cfg: PetShopConfig, directory: Arc<dyn TenantDirectory>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                directory,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &PetShopConfig {
        &self.inner.cfg
    }

    pub fn directory(&self) -> &dyn TenantDirectory {
        self.inner.directory.as_ref()
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
