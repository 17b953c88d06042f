//! Prediction engine

mod artifact;
mod inference;
mod service;

pub use artifact::{load_classifier, ArtifactConfig, MAX_ARTIFACT_BYTES};
pub use inference::{InferenceStats, OnnxClassifier};
pub use service::{PredictionService, PROBABILITY_SUM_EPSILON};

use crate::errors::ClassifierError;
use crate::models::FeatureVector;
use crate::schema::CLASS_COUNT;

/// Capability supplied by an externally trained classifier artifact
///
/// The artifact's internal algorithm is opaque; the service only relies on
/// these two operations plus a version string. Tests substitute a stub.
pub trait Classifier: Send + Sync {
    /// Class index for one input vector
    fn classify(&self, features: &FeatureVector) -> Result<usize, ClassifierError>;

    /// Per-class probability distribution for one input vector
    fn class_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<[f32; CLASS_COUNT], ClassifierError>;

    /// Version of the loaded artifact
    fn model_version(&self) -> &str;
}
