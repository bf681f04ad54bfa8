//! # Monetization Core
//!
//! Market analysis, revenue prediction and ethical-guidance orchestration.
//!
//! The analytic outputs are fixed simulated values. What this crate pins down
//! is the validation and error-propagation contract between the
//! [`MonetizationStrategist`] and the collaborators it is built from.

pub mod analyzer;
pub mod collaborators;
pub mod error;
pub mod models;
pub mod predictor;
pub mod strategist;

pub use analyzer::*;
pub use collaborators::*;
pub use error::*;
pub use models::*;
pub use predictor::*;
pub use strategist::*;
