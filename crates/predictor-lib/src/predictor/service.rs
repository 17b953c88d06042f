//! Stateless prediction service
//!
//! One blocking call per user action: validates the input vector at the
//! boundary, delegates to the injected classifier, maps the class index
//! through the static label table and pairs it with the probability
//! distribution. The classifier is read-only after load, so calls share it
//! without locking.

use super::Classifier;
use crate::errors::{ClassifierError, PredictError};
use crate::models::{FeatureVector, PredictionResult, RiskLabel};
use crate::schema::CLASS_COUNT;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Tolerance when checking that probabilities sum to one
pub const PROBABILITY_SUM_EPSILON: f32 = 1e-6;

/// Per-entry slack for float drift before an output is rejected outright
const ENTRY_DRIFT: f32 = 1e-3;

/// Maps schema-conformant input vectors to labeled prediction results
pub struct PredictionService {
    classifier: Arc<dyn Classifier>,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Run one prediction
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionResult, PredictError> {
        let start = Instant::now();

        // The classifier must never see a non-finite value.
        if let Err(e) = features.validate_numeric() {
            warn!(error = %e, "Input rejected at schema boundary");
            return Err(e.into());
        }

        let index = self.classifier.classify(features).map_err(|e| {
            warn!(error = %e, "Classifier failed");
            PredictError::from(e)
        })?;
        let label = RiskLabel::from_class_index(index).ok_or_else(|| {
            let e = ClassifierError::ClassIndexOutOfRange {
                index,
                classes: CLASS_COUNT,
            };
            warn!(error = %e, "Classifier returned an unmapped class");
            PredictError::from(e)
        })?;

        let raw = self.classifier.class_probabilities(features).map_err(|e| {
            warn!(error = %e, "Classifier failed");
            PredictError::from(e)
        })?;
        let probabilities = normalize_distribution(raw)?;

        let result = PredictionResult {
            label,
            probabilities,
            model_version: self.classifier.model_version().to_string(),
            generated_at: chrono::Utc::now().timestamp(),
        };

        debug!(
            label = %result.label.text(),
            duration_us = start.elapsed().as_micros() as u64,
            "Prediction completed"
        );

        Ok(result)
    }

    /// Version of the injected classifier artifact
    pub fn model_version(&self) -> &str {
        self.classifier.model_version()
    }
}

/// Validate a raw probability row and tidy float drift into a distribution
fn normalize_distribution(
    raw: [f32; CLASS_COUNT],
) -> Result<[f32; CLASS_COUNT], ClassifierError> {
    for (index, p) in raw.iter().enumerate() {
        if !p.is_finite() {
            return Err(ClassifierError::InvalidDistribution {
                reason: format!("entry {} is not finite", index),
            });
        }
        if *p < -ENTRY_DRIFT || *p > 1.0 + ENTRY_DRIFT {
            return Err(ClassifierError::InvalidDistribution {
                reason: format!("entry {} ({}) outside [0, 1]", index, p),
            });
        }
    }

    let mut probabilities = raw.map(|p| p.clamp(0.0, 1.0));
    let sum: f32 = probabilities.iter().sum();
    if sum <= 0.0 {
        return Err(ClassifierError::InvalidDistribution {
            reason: "probabilities sum to zero".to_string(),
        });
    }
    if (sum - 1.0).abs() > CLASS_COUNT as f32 * ENTRY_DRIFT {
        return Err(ClassifierError::InvalidDistribution {
            reason: format!("probabilities sum to {}", sum),
        });
    }
    if (sum - 1.0).abs() > PROBABILITY_SUM_EPSILON {
        for p in probabilities.iter_mut() {
            *p /= sum;
        }
    }

    Ok(probabilities)
}
