//! Predict command: build the input vector and run one prediction

use crate::config::Config;
use crate::output::{JsonPresenter, OutputFormat, TablePresenter};
use anyhow::{anyhow, Context, Result};
use predictor_lib::models::FeatureVector;
use predictor_lib::predictor::{load_classifier, ArtifactConfig, Classifier, PredictionService};
use predictor_lib::present::ResultPresenter;
use predictor_lib::templates::Template;
use predictor_lib::StructuredLogger;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inputs of one `dbrisk predict` invocation
pub struct PredictArgs {
    pub model: Option<String>,
    pub checksum: Option<String>,
    pub template: Option<String>,
    pub set: Vec<String>,
    pub input: Option<String>,
    pub format: OutputFormat,
}

pub fn run(args: PredictArgs) -> Result<()> {
    let file_config = Config::load().unwrap_or_default();

    let model_path = args
        .model
        .or_else(|| file_config.model_path.clone())
        .ok_or_else(|| {
            anyhow!("No classifier artifact configured; pass --model or set DBRISK_MODEL")
        })?;

    let artifact_config = ArtifactConfig {
        expected_checksum: args.checksum.or_else(|| file_config.model_checksum.clone()),
        model_version: file_config
            .model_version
            .clone()
            .unwrap_or_else(|| "v1".to_string()),
        ..Default::default()
    };

    // A LoadError here is fatal: nothing is predicted against a bad artifact.
    let classifier = load_classifier(Path::new(&model_path), &artifact_config)
        .context("Failed to load classifier artifact")?;

    let logger = StructuredLogger::new("dbrisk");
    logger.log_startup(CLI_VERSION, classifier.model_version());

    let template = args
        .template
        .as_deref()
        .or(file_config.default_template.as_deref());
    let vector = build_vector(template, &args.set, args.input.as_deref())?;

    let service = PredictionService::new(Arc::new(classifier));
    let start = std::time::Instant::now();
    let result = match service.predict(&vector) {
        Ok(result) => result,
        Err(e) => {
            logger.log_prediction_failed(&e);
            return Err(anyhow::Error::new(e).context("Prediction failed"));
        }
    };
    logger.log_prediction(&result, start.elapsed().as_micros() as u64);

    let rendered = match args.format {
        OutputFormat::Table => TablePresenter.present(&result),
        OutputFormat::Json => JsonPresenter.present(&result),
    };
    println!("{}", rendered);

    logger.log_shutdown("prediction complete");
    Ok(())
}

/// Assemble the input vector from template, JSON input and field overrides
fn build_vector(
    template: Option<&str>,
    overrides: &[String],
    input: Option<&str>,
) -> Result<FeatureVector> {
    let mut vector = if let Some(path) = input {
        read_vector(path)?
    } else if let Some(name) = template {
        Template::find(name)
            .ok_or_else(|| anyhow!("Unknown template '{}'; see `dbrisk templates`", name))?
            .vector()
    } else {
        FeatureVector::zeroed()
    };

    for entry in overrides {
        let (field, raw) = entry
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid --set '{}'; expected FIELD=VALUE", entry))?;
        let value: f32 = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid numeric value in --set '{}'", entry))?;
        vector
            .set(field.trim(), value)
            .with_context(|| format!("Unknown field in --set '{}'", entry))?;
    }

    Ok(vector)
}

/// Read a complete name-keyed vector from a JSON file or stdin
fn read_vector(path: &str) -> Result<FeatureVector> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read vector from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vector file {}", path))?
    };
    serde_json::from_str(&raw).context("Failed to parse input vector")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_vector_defaults_to_zeroed() {
        let vector = build_vector(None, &[], None).unwrap();
        assert_eq!(vector, FeatureVector::zeroed());
    }

    #[test]
    fn test_build_vector_from_template() {
        let vector = build_vector(Some("low-risk"), &[], None).unwrap();
        assert_eq!(vector.get("BMI"), Some(23.0));
    }

    #[test]
    fn test_build_vector_applies_overrides() {
        let overrides = vec!["BMI=31".to_string(), "Age=50".to_string()];
        let vector = build_vector(Some("low-risk"), &overrides, None).unwrap();
        assert_eq!(vector.get("BMI"), Some(31.0));
        assert_eq!(vector.get("Age"), Some(50.0));
        assert_eq!(vector.get("CholCheck"), Some(1.0));
    }

    #[test]
    fn test_build_vector_rejects_bad_override() {
        assert!(build_vector(None, &["BMI".to_string()], None).is_err());
        assert!(build_vector(None, &["BMI=abc".to_string()], None).is_err());
        assert!(build_vector(None, &["Glucose=90".to_string()], None).is_err());
    }

    #[test]
    fn test_build_vector_rejects_unknown_template() {
        assert!(build_vector(Some("extreme"), &[], None).is_err());
    }

    #[test]
    fn test_read_vector_from_file() {
        let vector = FeatureVector::zeroed();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vector.json");
        std::fs::write(&path, serde_json::to_string(&vector).unwrap()).unwrap();

        let read = build_vector(None, &[], Some(path.to_str().unwrap())).unwrap();
        assert_eq!(read, vector);
    }

    #[test]
    fn test_read_vector_rejects_partial_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vector.json");
        std::fs::write(&path, r#"{"HighBP": 1.0}"#).unwrap();

        assert!(build_vector(None, &[], Some(path.to_str().unwrap())).is_err());
    }
}
