//! Request and response records for the monetization pipeline
//!
//! Every record here lives for the duration of a single call. Nothing is
//! cached, mutated in place or persisted by the core.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MonetizationError;

/// String-keyed JSON map used for strategies, dashboard snapshots and configuration.
pub type Mapping = serde_json::Map<String, Value>;

// =============================================================================
// Market Data
// =============================================================================

/// Raw market data handed to the analyzer.
///
/// `prices` and `volumes` are optional; any other keys are carried through
/// in `extra`. A value with no keys at all is considered empty. A series
/// given as an explicit `null` stays in `extra`, so the key still counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Mapping")]
pub struct MarketData {
    /// Ordered price series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<f64>>,

    /// Ordered volume series
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volumes: Option<Vec<f64>>,

    /// Any additional keys supplied by the caller
    #[serde(flatten)]
    pub extra: Mapping,
}

impl MarketData {
    pub fn new(prices: Vec<f64>, volumes: Vec<f64>) -> Self {
        Self {
            prices: Some(prices),
            volumes: Some(volumes),
            extra: Mapping::new(),
        }
    }

    pub fn with_prices(prices: Vec<f64>) -> Self {
        Self {
            prices: Some(prices),
            ..Self::default()
        }
    }

    /// True when no key at all is present
    pub fn is_empty(&self) -> bool {
        self.prices.is_none() && self.volumes.is_none() && self.extra.is_empty()
    }

    /// Price series, empty when absent
    pub fn prices(&self) -> &[f64] {
        self.prices.as_deref().unwrap_or(&[])
    }

    /// Volume series, empty when absent
    pub fn volumes(&self) -> &[f64] {
        self.volumes.as_deref().unwrap_or(&[])
    }
}

impl TryFrom<Mapping> for MarketData {
    type Error = serde_json::Error;

    fn try_from(mut map: Mapping) -> Result<Self, Self::Error> {
        let prices = take_series(&mut map, "prices")?;
        let volumes = take_series(&mut map, "volumes")?;

        Ok(Self {
            prices,
            volumes,
            extra: map,
        })
    }
}

/// Pull a numeric series out of `map`. Nulls are left in place.
fn take_series(map: &mut Mapping, key: &str) -> Result<Option<Vec<f64>>, serde_json::Error> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => match map.remove(key) {
            Some(value) => serde_json::from_value(value).map(Some),
            None => Ok(None),
        },
    }
}

/// Historical price and volume series for a timeframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl From<HistoricalData> for MarketData {
    fn from(data: HistoricalData) -> Self {
        MarketData::new(data.prices, data.volumes)
    }
}

// =============================================================================
// Analysis Output
// =============================================================================

/// Market direction signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
            Trend::Flat => "FLAT",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a market analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub trend: Trend,

    /// Signal strength (0-1)
    pub strength: f64,
}

/// Outcome of a revenue prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RevenuePrediction {
    pub predicted_revenue: f64,

    /// Model confidence (0-1)
    pub confidence: f64,
}

// =============================================================================
// Model Versions
// =============================================================================

/// Revenue model tag. Only `v1` and `v2` exist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModelVersion {
    V1,
    V2,
}

impl ModelVersion {
    pub const ALL: [ModelVersion; 2] = [ModelVersion::V1, ModelVersion::V2];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelVersion::V1 => "v1",
            ModelVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVersion {
    type Err = MonetizationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "v1" => Ok(ModelVersion::V1),
            "v2" => Ok(ModelVersion::V2),
            other => Err(MonetizationError::InvalidModelVersion(other.to_string())),
        }
    }
}

// =============================================================================
// Strategy
// =============================================================================

/// Tunable parameters of a monetization strategy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrategyParameters {
    /// Analysis timeframe (e.g., "1D", "4h")
    pub timeframe: String,

    /// Maximum acceptable loss as a fraction of capital
    pub risk_tolerance: f64,

    /// Profit target as a fraction of capital
    pub target_profit: f64,

    /// Maximum number of reinvestment rounds
    pub max_reinvestment: u32,
}

impl Default for StrategyParameters {
    fn default() -> Self {
        Self {
            timeframe: "1D".to_string(),
            risk_tolerance: 0.05,
            target_profit: 0.10,
            max_reinvestment: 3,
        }
    }
}

impl StrategyParameters {
    /// Strategy as the mapping handed to a compliance check
    pub fn to_mapping(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert("timeframe".to_string(), Value::from(self.timeframe.clone()));
        map.insert("risk_tolerance".to_string(), Value::from(self.risk_tolerance));
        map.insert("target_profit".to_string(), Value::from(self.target_profit));
        map.insert(
            "max_reinvestment".to_string(),
            Value::from(self.max_reinvestment),
        );
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_market_data_emptiness() {
        assert!(MarketData::default().is_empty());
        assert!(!MarketData::with_prices(vec![]).is_empty());

        let extra_only: MarketData = serde_json::from_value(json!({"symbol": "BTC"})).unwrap();
        assert!(!extra_only.is_empty());
        assert!(extra_only.prices().is_empty());
    }

    #[test]
    fn test_market_data_deserializes_optional_series() {
        let data: MarketData =
            serde_json::from_value(json!({"prices": [100.0, 200.0], "venue": "spot"})).unwrap();

        assert_eq!(data.prices(), &[100.0, 200.0]);
        assert!(data.volumes.is_none());
        assert_eq!(data.extra.get("venue"), Some(&json!("spot")));
    }

    #[test]
    fn test_explicit_null_series_counts_as_present() {
        let data: MarketData = serde_json::from_value(json!({"prices": null})).unwrap();

        assert!(!data.is_empty());
        assert!(data.prices.is_none());
        assert!(data.prices().is_empty());
        assert_eq!(data.extra.get("prices"), Some(&Value::Null));
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({"prices": null}));
    }

    #[test]
    fn test_malformed_series_is_rejected() {
        assert!(serde_json::from_value::<MarketData>(json!({"prices": "high"})).is_err());
    }

    #[test]
    fn test_model_version_parsing() {
        assert_eq!("v1".parse::<ModelVersion>().unwrap(), ModelVersion::V1);
        assert_eq!("v2".parse::<ModelVersion>().unwrap(), ModelVersion::V2);
        assert!(matches!(
            "v3".parse::<ModelVersion>(),
            Err(MonetizationError::InvalidModelVersion(v)) if v == "v3"
        ));
        assert!("V1".parse::<ModelVersion>().is_err());
    }

    #[test]
    fn test_trend_serializes_uppercase() {
        let result = AnalysisResult {
            trend: Trend::Up,
            strength: 0.85,
        };
        assert_eq!(
            serde_json::to_value(result).unwrap(),
            json!({"trend": "UP", "strength": 0.85})
        );
    }

    #[test]
    fn test_strategy_defaults_to_mapping() {
        let map = StrategyParameters::default().to_mapping();

        assert_eq!(map.get("timeframe"), Some(&json!("1D")));
        assert_eq!(map.get("risk_tolerance"), Some(&json!(0.05)));
        assert_eq!(map.get("target_profit"), Some(&json!(0.10)));
        assert_eq!(map.get("max_reinvestment"), Some(&json!(3)));
    }
}
