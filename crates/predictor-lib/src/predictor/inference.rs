//! ONNX inference using tract
//!
//! Runs the pre-trained classifier via tract-onnx. The artifact is opaque:
//! the only assumed contract is a [1, 17] f32 input and a [1, 3] f32
//! probability row as the first output.

use super::Classifier;
use crate::errors::{ClassifierError, LoadError};
use crate::models::FeatureVector;
use crate::schema::{CLASS_COUNT, FIELD_COUNT};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, warn};
use tract_onnx::prelude::*;

/// Maximum inference latency before warning
const MAX_INFERENCE_MS: u128 = 5;

type TractModel = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

/// Classifier backed by a serialized ONNX artifact
pub struct OnnxClassifier {
    model: TractModel,
    model_version: String,
    inference_count: AtomicU64,
    slow_inference_count: AtomicU64,
}

impl OnnxClassifier {
    /// Load a classifier from artifact bytes
    pub fn from_bytes(artifact: &[u8], model_version: impl Into<String>) -> Result<Self, LoadError> {
        let model = Self::load_model(artifact)?;
        Ok(Self {
            model,
            model_version: model_version.into(),
            inference_count: AtomicU64::new(0),
            slow_inference_count: AtomicU64::new(0),
        })
    }

    /// Parse and optimize an ONNX graph from bytes
    fn load_model(artifact: &[u8]) -> Result<TractModel, LoadError> {
        tract_onnx::onnx()
            .model_for_read(&mut std::io::Cursor::new(artifact))
            .and_then(|model| model.with_input_fact(0, f32::fact([1, FIELD_COUNT]).into()))
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(LoadError::Parse)
    }

    /// Run the model for one input row
    fn run(&self, features: &FeatureVector) -> Result<[f32; CLASS_COUNT], ClassifierError> {
        let start = Instant::now();

        let input = features_to_tensor(features);
        let outputs = self
            .model
            .run(tvec!(input.into()))
            .map_err(ClassifierError::Inference)?;
        let output = outputs
            .first()
            .ok_or_else(|| ClassifierError::InvalidDistribution {
                reason: "model produced no output".to_string(),
            })?;

        let view = output
            .to_array_view::<f32>()
            .map_err(ClassifierError::Inference)?;
        let values: Vec<f32> = view.iter().copied().collect();
        if values.len() != CLASS_COUNT {
            return Err(ClassifierError::InvalidDistribution {
                reason: format!(
                    "model output has {} values, expected {}",
                    values.len(),
                    CLASS_COUNT
                ),
            });
        }

        let elapsed = start.elapsed();
        self.inference_count.fetch_add(1, Ordering::Relaxed);
        if elapsed.as_millis() > MAX_INFERENCE_MS {
            self.slow_inference_count.fetch_add(1, Ordering::Relaxed);
            warn!(
                elapsed_ms = elapsed.as_millis(),
                "Inference exceeded {}ms target", MAX_INFERENCE_MS
            );
        } else {
            debug!(elapsed_us = elapsed.as_micros(), "Inference completed");
        }

        let mut probabilities = [0.0; CLASS_COUNT];
        probabilities.copy_from_slice(&values);
        Ok(probabilities)
    }

    /// Inference statistics
    pub fn stats(&self) -> InferenceStats {
        InferenceStats {
            total_inferences: self.inference_count.load(Ordering::Relaxed),
            slow_inferences: self.slow_inference_count.load(Ordering::Relaxed),
        }
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<usize, ClassifierError> {
        let probabilities = self.run(features)?;
        Ok(argmax(&probabilities))
    }

    fn class_probabilities(
        &self,
        features: &FeatureVector,
    ) -> Result<[f32; CLASS_COUNT], ClassifierError> {
        self.run(features)
    }

    fn model_version(&self) -> &str {
        &self.model_version
    }
}

/// Index of the largest entry; first wins on ties
fn argmax(values: &[f32; CLASS_COUNT]) -> usize {
    let mut best = 0;
    for (index, value) in values.iter().enumerate() {
        if *value > values[best] {
            best = index;
        }
    }
    best
}

fn features_to_tensor(features: &FeatureVector) -> Tensor {
    tract_ndarray::Array2::from_shape_vec((1, FIELD_COUNT), features.values().to_vec())
        .unwrap()
        .into()
}

/// Inference statistics
#[derive(Debug, Clone)]
pub struct InferenceStats {
    pub total_inferences: u64,
    pub slow_inferences: u64,
}
