// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::SalesDashboardService;
use crate::application::dataset_cache::DatasetCache;
use crate::domain::region::RegionTable;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_repository::CsvSalesRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;
    let regions = RegionTable::with_overrides(&config.region_overrides());
    tracing::info!("Using {} dealer region coordinates", regions.len());

    // Create repository and cache (infrastructure layer)
    let repository = Arc::new(CsvSalesRepository::new(&config.dataset.path));
    let dataset = DatasetCache::new(repository);

    // Warm the cache; a bad dataset is reported per request rather than at startup
    match dataset.records().await {
        Ok(records) => tracing::info!("Serving {} sales records", records.len()),
        Err(e) => tracing::warn!("Sales dataset not loaded: {}", e),
    }

    // Create services (application layer)
    let dashboard_service = SalesDashboardService::new(dataset, regions);
    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = build_router(state);

    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting car-sales-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
