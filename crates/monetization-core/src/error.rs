//! Error types for the monetization core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonetizationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid model version: {0}. Valid versions: v1, v2")]
    InvalidModelVersion(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),

    #[error("Empty configuration: {0}")]
    EmptyConfig(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Dashboard error: {0}")]
    Dashboard(String),

    #[error("Compliance check error: {0}")]
    Compliance(String),

    #[error("Configuration store error: {0}")]
    ConfigStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type MonetizationResult<T> = Result<T, MonetizationError>;
