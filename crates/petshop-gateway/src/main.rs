//! petshop gateway binary.
//!
//! Loads `petshop.yaml` (or the file named by `PETSHOP_CONFIG`), builds the
//! tenant directory and serves entitlement and appointment decisions over HTTP.

use tracing_subscriber::{fmt, EnvFilter};

use petshop_gateway::{app_state, config, router};

const DEFAULT_CONFIG: &str = "petshop.yaml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::var("PETSHOP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let cfg = config::load_from_file(&path)?;
    let listen = cfg.server.listen_addr()?;
    let tenants = cfg.tenants.len();

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, tenants, config = %path, "petshop-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
