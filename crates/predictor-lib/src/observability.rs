//! Observability for the predictor
//!
//! Structured logging with tracing. Events carry an `event` field so log
//! pipelines can filter on them.

use crate::errors::PredictError;
use crate::models::PredictionResult;
use tracing::{info, warn};

/// Structured logger for prediction events
#[derive(Clone)]
pub struct StructuredLogger {
    app_name: String,
}

impl StructuredLogger {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Log process startup
    pub fn log_startup(&self, app_version: &str, model_version: &str) {
        info!(
            event = "startup",
            app = %self.app_name,
            app_version = %app_version,
            model_version = %model_version,
            "Predictor started"
        );
    }

    /// Log a completed prediction
    pub fn log_prediction(&self, result: &PredictionResult, duration_us: u64) {
        info!(
            event = "prediction_generated",
            app = %self.app_name,
            label = %result.label.text(),
            p_no_diabetes = result.probabilities[0],
            p_pre_diabetes = result.probabilities[1],
            p_diabetes = result.probabilities[2],
            model_version = %result.model_version,
            duration_us = duration_us,
            "Generated risk prediction"
        );
    }

    /// Log a failed prediction call
    pub fn log_prediction_failed(&self, error: &PredictError) {
        let kind = match error {
            PredictError::Schema(_) => "schema_mismatch",
            PredictError::Classifier(_) => "classifier_error",
        };
        warn!(
            event = "prediction_failed",
            app = %self.app_name,
            kind = %kind,
            error = %error,
            "Prediction call failed"
        );
    }

    /// Log process shutdown
    pub fn log_shutdown(&self, reason: &str) {
        info!(
            event = "shutdown",
            app = %self.app_name,
            reason = %reason,
            "Predictor shutting down"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLabel;

    #[test]
    fn test_structured_logger_creation() {
        let logger = StructuredLogger::new("test-app");
        assert_eq!(logger.app_name, "test-app");
    }

    #[test]
    fn test_logging_does_not_panic_without_subscriber() {
        let logger = StructuredLogger::new("test-app");
        let result = PredictionResult {
            label: RiskLabel::NoDiabetes,
            probabilities: [0.8, 0.15, 0.05],
            model_version: "v1".to_string(),
            generated_at: 0,
        };
        logger.log_startup("0.1.0", "v1");
        logger.log_prediction(&result, 120);
        logger.log_shutdown("test complete");
    }
}
