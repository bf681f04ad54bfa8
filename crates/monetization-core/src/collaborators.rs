//! Collaborator interfaces consumed by the core
//!
//! Concrete implementations live outside this crate and are injected into
//! [`MarketAnalyzer`](crate::MarketAnalyzer), [`RevenuePredictor`](crate::RevenuePredictor)
//! and [`MonetizationStrategist`](crate::MonetizationStrategist) at construction.

use crate::error::MonetizationResult;
use crate::models::*;

/// Leveled text logging
#[cfg_attr(test, mockall::automock)]
pub trait ActivityLogger: Send + Sync {
    fn log_info(&self, message: &str) -> MonetizationResult<()>;

    fn log_error(&self, message: &str) -> MonetizationResult<()>;
}

/// Mapping store backed by a named file
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore: Send + Sync {
    fn read_config(&self) -> MonetizationResult<Mapping>;

    fn write_config(&self, config: &Mapping) -> MonetizationResult<()>;
}

/// Fire-and-forget status reporting
#[cfg_attr(test, mockall::automock)]
pub trait Dashboard: Send + Sync {
    fn update(&self, data: &Mapping) -> MonetizationResult<()>;

    fn report_issue(&self, issue: &str) -> MonetizationResult<()>;
}

/// Ethical judgment over a proposed strategy
#[cfg_attr(test, mockall::automock)]
pub trait ComplianceCheck: Send + Sync {
    fn check_compliance(&self, strategy: &Mapping) -> MonetizationResult<bool>;
}

/// Market analysis as seen by the strategist.
///
/// `None` means the analysis produced nothing.
pub trait MarketAnalysis: Send + Sync {
    fn analyze(&self, data: Option<&MarketData>) -> MonetizationResult<Option<AnalysisResult>>;
}

/// Revenue prediction as seen by the strategist.
///
/// `None` means the model produced nothing.
#[cfg_attr(test, mockall::automock)]
pub trait RevenueModel: Send + Sync {
    fn forecast(&self, model_version: &str) -> MonetizationResult<Option<RevenuePrediction>>;
}

/// Record an error through `logger`; a failing logger only leaves a tracing warning.
pub(crate) fn record_error(logger: &dyn ActivityLogger, message: &str) {
    if let Err(e) = logger.log_error(message) {
        tracing::warn!(error = %e, log_message = message, "Failed to record error");
    }
}

/// Record an informational message through `logger`; a failing logger only leaves a tracing warning.
pub(crate) fn record_info(logger: &dyn ActivityLogger, message: &str) {
    if let Err(e) = logger.log_info(message) {
        tracing::warn!(error = %e, log_message = message, "Failed to record activity");
    }
}
