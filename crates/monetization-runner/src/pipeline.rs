//! One-shot monetization pipeline

use std::sync::Arc;

use chrono::{DateTime, Utc};
use monetization_core::*;
use serde::Serialize;
use serde_json::Value;

use crate::compliance::EthicalGuidanceSystem;
use crate::config::AppConfig;
use crate::dashboard::{HttpDashboard, LogDashboard};
use crate::logging::TracingLogger;
use crate::store::FileConfigStore;

/// Snapshot pushed to the dashboard after a run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub trend: Trend,
    pub strength: f64,
    pub anomaly: bool,
    pub predicted_revenue: f64,
    pub confidence: f64,
    pub compliant: bool,
    pub model_version: String,
    pub generated_at: DateTime<Utc>,
}

impl PipelineReport {
    pub fn to_mapping(&self) -> MonetizationResult<Mapping> {
        Ok(serde_json::from_value(serde_json::to_value(self)?)?)
    }
}

pub struct Pipeline {
    strategist: MonetizationStrategist,
    analyzer: Arc<MarketAnalyzer>,
    settings: AppConfig,
}

impl Pipeline {
    pub fn new(
        strategist: MonetizationStrategist,
        analyzer: Arc<MarketAnalyzer>,
        settings: AppConfig,
    ) -> Self {
        Self {
            strategist,
            analyzer,
            settings,
        }
    }

    /// Wire the concrete collaborators described by `settings`
    pub fn from_config(settings: AppConfig) -> Self {
        let analyzer = Arc::new(MarketAnalyzer::new(Arc::new(TracingLogger::new(
            "market_analyzer",
        ))));
        let predictor = Arc::new(RevenuePredictor::new(Arc::new(TracingLogger::new(
            "revenue_predictor",
        ))));

        let dashboard: Arc<dyn Dashboard> = match &settings.dashboard.url {
            Some(url) => {
                let http = HttpDashboard::new(url, settings.dashboard.timeout_seconds);
                tracing::info!(url = %http.base_url(), "Reporting to HTTP dashboard");
                Arc::new(http)
            }
            None => {
                tracing::info!("No dashboard URL configured, reporting to log");
                Arc::new(LogDashboard)
            }
        };

        let strategist = MonetizationStrategist::new(Collaborators {
            analyzer: analyzer.clone(),
            predictor,
            compliance: Arc::new(EthicalGuidanceSystem::new(settings.ethics.clone())),
            dashboard,
            logger: Arc::new(TracingLogger::new("monetization_strategist")),
            config_store: Arc::new(FileConfigStore::new(&settings.storage.config_path)),
        });

        Self::new(strategist, analyzer, settings)
    }

    pub fn run(&self) -> MonetizationResult<PipelineReport> {
        self.strategist
            .log_system_activity("Monetization pipeline started.");

        let mut stored = self.strategist.load_configuration()?;

        let history: MarketData = self
            .analyzer
            .get_historical_data(&self.settings.strategy.timeframe)
            .into();
        let analysis = self.strategist.analyze_market(Some(&history))?;
        let anomaly = self.analyzer.detect_anomalies(&history)?;

        let prediction = self
            .strategist
            .predict_revenue(&self.settings.model.version)?;

        let compliant = self
            .strategist
            .apply_ethical_guidance(&self.settings.strategy.to_mapping())?;

        let report = PipelineReport {
            trend: analysis.trend,
            strength: analysis.strength,
            anomaly,
            predicted_revenue: prediction.predicted_revenue,
            confidence: prediction.confidence,
            compliant,
            model_version: self.settings.model.version.clone(),
            generated_at: Utc::now(),
        };

        self.strategist.update_dashboard(&report.to_mapping()?);

        stored.insert(
            "last_run".to_string(),
            Value::from(report.generated_at.to_rfc3339()),
        );
        self.strategist.save_configuration(&stored);

        self.strategist
            .log_system_activity("Monetization pipeline finished.");

        Ok(report)
    }
}
