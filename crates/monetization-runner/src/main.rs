//! Monetization Runner
//!
//! Loads configuration, wires the monetization strategist to its concrete
//! collaborators and runs the analysis, prediction, compliance and reporting
//! pipeline once.

mod compliance;
mod config;
mod dashboard;
mod logging;
mod pipeline;
mod store;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;
use crate::pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("monetization_runner=info,monetization_core=info")
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting monetization runner");

    let config = AppConfig::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        e
    })?;

    tracing::info!(
        timeframe = %config.strategy.timeframe,
        model_version = %config.model.version,
        config_path = %config.storage.config_path,
        dashboard = config.dashboard.url.as_deref().unwrap_or("log"),
        "Configuration loaded"
    );

    let pipeline = Pipeline::from_config(config);

    let report = pipeline.run().map_err(|e| {
        tracing::error!(error = %e, "Monetization pipeline failed");
        anyhow::anyhow!("Pipeline run failed: {}", e)
    })?;

    tracing::info!(
        trend = %report.trend,
        strength = report.strength,
        anomaly = report.anomaly,
        predicted_revenue = report.predicted_revenue,
        confidence = report.confidence,
        compliant = report.compliant,
        "Monetization pipeline completed"
    );

    Ok(())
}
