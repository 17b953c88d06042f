//! Core library for diabetes risk prediction
//!
//! This crate provides the input-to-prediction contract:
//! - The fixed, ordered 17-field health indicator schema
//! - A stateless prediction service over an injected classifier
//! - ONNX artifact loading and inference
//! - Built-in input templates
//! - Structured logging and a swappable presentation seam

pub mod errors;
pub mod models;
pub mod observability;
pub mod predictor;
pub mod present;
pub mod schema;
pub mod templates;

pub use errors::{ClassifierError, LoadError, PredictError, SchemaMismatch};
pub use models::*;
pub use observability::StructuredLogger;
pub use predictor::{Classifier, OnnxClassifier, PredictionService};
pub use present::ResultPresenter;
pub use schema::{CLASS_COUNT, FIELD_COUNT, FIELD_NAMES};
pub use templates::Template;
