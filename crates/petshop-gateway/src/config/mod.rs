//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use petshop_core::error::{PetShopError, Result};

pub use schema::{PetShopConfig, ServerSection, TenantConfig};

pub fn load_from_file(path: &str) -> Result<PetShopConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PetShopError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PetShopConfig> {
    let cfg: PetShopConfig = serde_yaml::from_str(s)
        .map_err(|e| PetShopError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
