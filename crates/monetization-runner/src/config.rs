use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use monetization_core::StrategyParameters;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub strategy: StrategyParameters,
    pub model: ModelConfig,
    pub storage: StorageConfig,
    pub dashboard: DashboardConfig,
    pub ethics: EthicsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ModelConfig {
    /// Revenue model tag passed to the predictor ("v1" or "v2")
    pub version: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// File backing the strategist's configuration store
    pub config_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    /// Base URL of the dashboard service. Snapshots go to the log when unset.
    #[serde(default)]
    pub url: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EthicsConfig {
    /// Highest acceptable `risk_tolerance`
    pub max_risk_tolerance: f64,
    /// Highest acceptable `max_reinvestment`
    pub max_reinvestment_limit: u64,
    /// Strategy keys that make a strategy non-compliant on sight
    #[serde(default)]
    pub prohibited_keys: Vec<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::with_defaults()?
            // Load from config files if they exist
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables
            // MONETIZATION__DASHBOARD__URL, MONETIZATION__MODEL__VERSION, etc.
            .add_source(
                Environment::with_prefix("MONETIZATION")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let strategy = StrategyParameters::default();

        Config::builder()
            // Strategy defaults
            .set_default("strategy.timeframe", strategy.timeframe)?
            .set_default("strategy.risk_tolerance", strategy.risk_tolerance)?
            .set_default("strategy.target_profit", strategy.target_profit)?
            .set_default("strategy.max_reinvestment", strategy.max_reinvestment as i64)?
            // Model defaults
            .set_default("model.version", "v2")?
            // Storage defaults
            .set_default("storage.config_path", "config.json")?
            // Dashboard defaults
            .set_default("dashboard.timeout_seconds", 10)?
            // Ethics defaults
            .set_default("ethics.max_risk_tolerance", 0.2)?
            .set_default("ethics.max_reinvestment_limit", 5)?
            .set_default(
                "ethics.prohibited_keys",
                vec!["insider_information".to_string(), "wash_trading".to_string()],
            )
    }
}
