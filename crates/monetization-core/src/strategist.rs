//! Monetization orchestration
//!
//! [`MonetizationStrategist`] puts one façade over the analyzer, the revenue
//! model, the compliance check, the dashboard, the configuration store and
//! the logger. Each operation delegates to exactly one collaborator.
//!
//! Failure policy:
//! - `analyze_market`, `predict_revenue`, `apply_ethical_guidance` and
//!   `load_configuration` log the error and return it.
//! - `update_dashboard` and `save_configuration` log the error and swallow it.
//! - `log_system_activity` writes to stderr when the logger itself fails.

use std::sync::Arc;

use crate::collaborators::*;
use crate::error::{MonetizationError, MonetizationResult};
use crate::models::*;

/// Issue reported to the dashboard when a strategy fails the compliance check
pub const ETHICS_VIOLATION_ISSUE: &str = "Ethical guideline violation detected.";

/// Everything a strategist is built from
#[derive(Clone)]
pub struct Collaborators {
    pub analyzer: Arc<dyn MarketAnalysis>,
    pub predictor: Arc<dyn RevenueModel>,
    pub compliance: Arc<dyn ComplianceCheck>,
    pub dashboard: Arc<dyn Dashboard>,
    pub logger: Arc<dyn ActivityLogger>,
    pub config_store: Arc<dyn ConfigStore>,
}

pub struct MonetizationStrategist {
    analyzer: Arc<dyn MarketAnalysis>,
    predictor: Arc<dyn RevenueModel>,
    compliance: Arc<dyn ComplianceCheck>,
    dashboard: Arc<dyn Dashboard>,
    logger: Arc<dyn ActivityLogger>,
    config_store: Arc<dyn ConfigStore>,
}

impl MonetizationStrategist {
    pub fn new(collaborators: Collaborators) -> Self {
        let Collaborators {
            analyzer,
            predictor,
            compliance,
            dashboard,
            logger,
            config_store,
        } = collaborators;

        Self {
            analyzer,
            predictor,
            compliance,
            dashboard,
            logger,
            config_store,
        }
    }

    pub fn analyze_market(&self, data: Option<&MarketData>) -> MonetizationResult<AnalysisResult> {
        self.logged("Market analysis failed", || {
            self.analyzer.analyze(data)?.ok_or_else(|| {
                MonetizationError::EmptyResult("No market analysis results returned.".to_string())
            })
        })
    }

    pub fn predict_revenue(&self, model_version: &str) -> MonetizationResult<RevenuePrediction> {
        self.logged("Revenue prediction failed", || {
            self.predictor.forecast(model_version)?.ok_or_else(|| {
                MonetizationError::EmptyResult("Revenue prediction failed.".to_string())
            })
        })
    }

    /// Run the compliance check on `strategy`.
    ///
    /// Non-compliance is a normal outcome: it is reported to the dashboard
    /// once and yields `Ok(false)`.
    pub fn apply_ethical_guidance(&self, strategy: &Mapping) -> MonetizationResult<bool> {
        self.logged("Ethical check failed", || {
            if self.compliance.check_compliance(strategy)? {
                return Ok(true);
            }
            tracing::warn!(keys = strategy.len(), "Strategy failed compliance check");
            self.dashboard.report_issue(ETHICS_VIOLATION_ISSUE)?;
            Ok(false)
        })
    }

    /// Push a snapshot to the dashboard. Failures are logged, never returned.
    pub fn update_dashboard(&self, data: &Mapping) {
        if let Err(e) = self.dashboard.update(data) {
            record_error(
                self.logger.as_ref(),
                &format!("Dashboard update failed: {}", e),
            );
        }
    }

    /// Record `message` through the logger, falling back to stderr.
    pub fn log_system_activity(&self, message: &str) {
        if let Err(e) = self.logger.log_info(message) {
            // Bypass the logger so a broken sink cannot recurse
            eprintln!("Logging failed: {}", e);
        }
    }

    pub fn load_configuration(&self) -> MonetizationResult<Mapping> {
        self.logged("Config loading failed", || {
            let config = self.config_store.read_config()?;
            if config.is_empty() {
                return Err(MonetizationError::EmptyConfig(
                    "Configuration file is empty.".to_string(),
                ));
            }
            Ok(config)
        })
    }

    /// Persist `config`. Failures are logged, never returned.
    pub fn save_configuration(&self, config: &Mapping) {
        if let Err(e) = self.config_store.write_config(config) {
            record_error(
                self.logger.as_ref(),
                &format!("Config saving failed: {}", e),
            );
        }
    }

    fn logged<T>(
        &self,
        context: &str,
        op: impl FnOnce() -> MonetizationResult<T>,
    ) -> MonetizationResult<T> {
        op().map_err(|e| {
            record_error(self.logger.as_ref(), &format!("{}: {}", context, e));
            e
        })
    }
}
