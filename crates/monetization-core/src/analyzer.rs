//! Market analysis
//!
//! The analyzer validates its input and reports a fixed simulated trend.
//! Anomaly detection is the only computed output: a plain price threshold.

use std::sync::Arc;

use crate::collaborators::{record_error, record_info, ActivityLogger, MarketAnalysis};
use crate::error::{MonetizationError, MonetizationResult};
use crate::models::*;

/// Trend reported for every valid input
pub const SIMULATED_TREND: Trend = Trend::Up;

/// Strength reported for every valid input
pub const SIMULATED_TREND_STRENGTH: f64 = 0.85;

/// Prices strictly above this value are anomalous
pub const ANOMALY_PRICE_THRESHOLD: f64 = 150.0;

const HISTORICAL_PRICES: [f64; 3] = [100.0, 105.0, 98.0];
const HISTORICAL_VOLUMES: [f64; 3] = [200.0, 300.0, 250.0];

pub struct MarketAnalyzer {
    logger: Arc<dyn ActivityLogger>,
}

impl MarketAnalyzer {
    pub fn new(logger: Arc<dyn ActivityLogger>) -> Self {
        Self { logger }
    }

    /// Analyze market data into a trend signal.
    ///
    /// Absent or empty data fails with [`MonetizationError::InvalidInput`].
    /// Success and failure each leave exactly one log entry.
    pub fn process(&self, data: Option<&MarketData>) -> MonetizationResult<AnalysisResult> {
        match data {
            Some(data) if !data.is_empty() => {
                let result = AnalysisResult {
                    trend: SIMULATED_TREND,
                    strength: SIMULATED_TREND_STRENGTH,
                };
                record_info(self.logger.as_ref(), "Market analysis completed successfully.");
                Ok(result)
            }
            _ => {
                let err = MonetizationError::InvalidInput(
                    "Empty or invalid market data provided.".to_string(),
                );
                record_error(
                    self.logger.as_ref(),
                    &format!("Market analysis failed: {}", err),
                );
                Err(err)
            }
        }
    }

    /// Historical series for `timeframe`. The timeframe is not validated
    /// and does not affect the series.
    pub fn get_historical_data(&self, timeframe: &str) -> HistoricalData {
        tracing::debug!(timeframe = %timeframe, "Fetching historical market data");

        HistoricalData {
            prices: HISTORICAL_PRICES.to_vec(),
            volumes: HISTORICAL_VOLUMES.to_vec(),
        }
    }

    /// True if any price exceeds [`ANOMALY_PRICE_THRESHOLD`].
    ///
    /// A missing or empty price series has no maximum and fails with
    /// [`MonetizationError::InsufficientData`].
    pub fn detect_anomalies(&self, data: &MarketData) -> MonetizationResult<bool> {
        let max_price = data.prices().iter().copied().reduce(f64::max);

        match max_price {
            Some(max) => Ok(max > ANOMALY_PRICE_THRESHOLD),
            None => {
                let err = MonetizationError::InsufficientData(
                    "No prices available for anomaly detection".to_string(),
                );
                record_error(
                    self.logger.as_ref(),
                    &format!("Anomaly detection failed: {}", err),
                );
                Err(err)
            }
        }
    }
}

impl MarketAnalysis for MarketAnalyzer {
    fn analyze(&self, data: Option<&MarketData>) -> MonetizationResult<Option<AnalysisResult>> {
        self.process(data).map(Some)
    }
}
