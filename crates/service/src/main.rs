//! Screening service - multi-model disease prediction
//!
//! Loads the four pre-trained classifiers at startup and serves prediction,
//! schema and health endpoints over HTTP.

use anyhow::{Context, Result};
use screener_lib::{
    health::components, HealthRegistry, ModelRegistry, Screen, ScreenerMetrics, ScreeningEngine,
    StructuredLogger, BREAST_CANCER_LEGACY_LABELS,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod api;
mod config;

const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with JSON output and env filter
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().json())
        .init();

    info!("Starting screener-service");

    // Load configuration
    let config = config::ServiceConfig::load()?;
    info!(model_dir = %config.model_dir.display(), "Service configured");

    // Load every artifact once; a missing or corrupt artifact is fatal
    let registry = ModelRegistry::load(&config.artifact_paths())
        .context("Failed to load model artifacts")?;

    let mut engine = ScreeningEngine::new(registry);
    if config.legacy_breast_cancer_labels {
        info!("Using legacy breast cancer label convention (class 2 = benign)");
        engine = engine.with_label_rule(Screen::BreastCancer, BREAST_CANCER_LEGACY_LABELS);
    }
    let engine = Arc::new(engine);

    // Initialize health registry
    let health_registry = HealthRegistry::new();
    health_registry.register(components::MODEL_REGISTRY);
    health_registry.register(components::PREDICTOR);
    health_registry.register(components::API);

    // Initialize metrics
    let metrics = ScreenerMetrics::new();
    metrics.set_screens_registered(engine.available_screens().len() as i64);
    for screen in engine.available_screens() {
        metrics.set_schema_version(screen.id(), screen.descriptor().schema_version);
    }

    // Initialize structured logger
    let logger = StructuredLogger::new("screener-service");
    logger.log_startup(SERVICE_VERSION, engine.available_screens().len());

    // Create shared application state
    let app_state = Arc::new(api::AppState::new(
        engine,
        health_registry.clone(),
        metrics.clone(),
        logger.clone(),
    ));

    // Mark service as ready after all artifacts are loaded
    health_registry.set_ready(true);

    // Start prediction and health server
    let api_handle = tokio::spawn(api::serve(config.api_port, app_state));

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    logger.log_shutdown("SIGINT received");
    info!("Shutting down");
    api_handle.abort();

    Ok(())
}
