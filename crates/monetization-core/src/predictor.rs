//! Revenue prediction

use std::sync::Arc;

use crate::collaborators::{record_error, ActivityLogger, RevenueModel};
use crate::error::MonetizationResult;
use crate::models::*;

/// Revenue reported by every model version
pub const SIMULATED_PREDICTED_REVENUE: f64 = 100_000.0;

/// Confidence reported by every model version
pub const SIMULATED_CONFIDENCE: f64 = 0.95;

/// Version reported as active
pub const ACTIVE_MODEL_VERSION: ModelVersion = ModelVersion::V2;

pub struct RevenuePredictor {
    logger: Arc<dyn ActivityLogger>,
}

impl RevenuePredictor {
    pub fn new(logger: Arc<dyn ActivityLogger>) -> Self {
        Self { logger }
    }

    /// Predict revenue with the named model.
    ///
    /// Any tag other than `v1`/`v2` is rejected. Both valid versions yield
    /// the same prediction.
    pub fn predict(&self, model_version: &str) -> MonetizationResult<RevenuePrediction> {
        let version = self.validate(model_version, "Revenue prediction failed")?;
        tracing::debug!(model_version = %version, "Predicting revenue");

        Ok(RevenuePrediction {
            predicted_revenue: SIMULATED_PREDICTED_REVENUE,
            confidence: SIMULATED_CONFIDENCE,
        })
    }

    pub fn get_model_version(&self) -> ModelVersion {
        ACTIVE_MODEL_VERSION
    }

    /// Validate `new_version`. Valid versions change nothing: the active
    /// model stays [`ACTIVE_MODEL_VERSION`].
    pub fn update_model(&self, new_version: &str) -> MonetizationResult<()> {
        let version = self.validate(new_version, "Model update failed")?;
        tracing::debug!(model_version = %version, "Model update accepted");
        Ok(())
    }

    fn validate(&self, tag: &str, context: &str) -> MonetizationResult<ModelVersion> {
        tag.parse::<ModelVersion>().map_err(|e| {
            record_error(self.logger.as_ref(), &format!("{}: {}", context, e));
            e
        })
    }
}

impl RevenueModel for RevenuePredictor {
    fn forecast(&self, model_version: &str) -> MonetizationResult<Option<RevenuePrediction>> {
        self.predict(model_version).map(Some)
    }
}
