//! Rule-based ethical guidance

use monetization_core::{ComplianceCheck, Mapping, MonetizationError, MonetizationResult};
use serde_json::Value;

use crate::config::EthicsConfig;

/// Checks a strategy mapping against configured ethical limits.
///
/// A strategy is non-compliant if it carries a prohibited key, a
/// `risk_tolerance` above the limit, or a `max_reinvestment` above the limit.
/// Missing fields pass. Fields of the wrong type are an error, not a verdict.
#[derive(Debug, Clone)]
pub struct EthicalGuidanceSystem {
    policy: EthicsConfig,
}

impl EthicalGuidanceSystem {
    pub fn new(policy: EthicsConfig) -> Self {
        Self { policy }
    }

    fn number(strategy: &Mapping, key: &str) -> MonetizationResult<Option<f64>> {
        match strategy.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => value.as_f64().map(Some).ok_or_else(|| {
                MonetizationError::Compliance(format!("{} must be a number, got {}", key, value))
            }),
        }
    }
}

impl ComplianceCheck for EthicalGuidanceSystem {
    fn check_compliance(&self, strategy: &Mapping) -> MonetizationResult<bool> {
        if let Some(key) = self
            .policy
            .prohibited_keys
            .iter()
            .find(|k| strategy.contains_key(k.as_str()))
        {
            tracing::warn!(key = %key, "Strategy uses a prohibited practice");
            return Ok(false);
        }

        if let Some(risk) = Self::number(strategy, "risk_tolerance")? {
            if risk > self.policy.max_risk_tolerance {
                tracing::warn!(
                    risk_tolerance = risk,
                    limit = self.policy.max_risk_tolerance,
                    "Risk tolerance above ethical limit"
                );
                return Ok(false);
            }
        }

        if let Some(rounds) = Self::number(strategy, "max_reinvestment")? {
            if rounds > self.policy.max_reinvestment_limit as f64 {
                tracing::warn!(
                    max_reinvestment = rounds,
                    limit = self.policy.max_reinvestment_limit,
                    "Reinvestment rounds above ethical limit"
                );
                return Ok(false);
            }
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monetization_core::StrategyParameters;
    use serde_json::json;

    fn system() -> EthicalGuidanceSystem {
        EthicalGuidanceSystem::new(EthicsConfig {
            max_risk_tolerance: 0.2,
            max_reinvestment_limit: 5,
            prohibited_keys: vec!["wash_trading".to_string()],
        })
    }

    #[test]
    fn test_default_strategy_is_compliant() {
        let strategy = StrategyParameters::default().to_mapping();
        assert!(system().check_compliance(&strategy).unwrap());
        assert!(system().check_compliance(&Mapping::new()).unwrap());
    }

    #[test]
    fn test_excess_risk_is_non_compliant() {
        let strategy = StrategyParameters {
            risk_tolerance: 0.5,
            ..StrategyParameters::default()
        }
        .to_mapping();

        assert!(!system().check_compliance(&strategy).unwrap());
    }

    #[test]
    fn test_excess_reinvestment_is_non_compliant() {
        let strategy = StrategyParameters {
            max_reinvestment: 6,
            ..StrategyParameters::default()
        }
        .to_mapping();

        assert!(!system().check_compliance(&strategy).unwrap());
    }

    #[test]
    fn test_prohibited_key_is_non_compliant() {
        let mut strategy = StrategyParameters::default().to_mapping();
        strategy.insert("wash_trading".to_string(), json!(true));

        assert!(!system().check_compliance(&strategy).unwrap());
    }

    #[test]
    fn test_wrong_type_is_error() {
        let mut strategy = Mapping::new();
        strategy.insert("risk_tolerance".to_string(), json!("high"));

        assert!(matches!(
            system().check_compliance(&strategy),
            Err(MonetizationError::Compliance(_))
        ));
    }
}
