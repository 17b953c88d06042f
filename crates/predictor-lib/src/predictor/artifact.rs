//! Classifier artifact loading
//!
//! Reads the serialized model from disk once at process start, with a size
//! cap and optional SHA-256 checksum validation. Every failure here is a
//! `LoadError` and must be surfaced before any prediction is served.

use super::OnnxClassifier;
use crate::errors::LoadError;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use tracing::info;

/// Maximum artifact size in bytes
pub const MAX_ARTIFACT_BYTES: usize = 10 * 1024 * 1024;

/// Configuration for artifact loading
#[derive(Debug, Clone)]
pub struct ArtifactConfig {
    /// Maximum artifact size in bytes
    pub max_artifact_bytes: usize,
    /// Expected SHA-256 checksum (hex), verified when present
    pub expected_checksum: Option<String>,
    /// Version reported for the loaded model
    pub model_version: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            max_artifact_bytes: MAX_ARTIFACT_BYTES,
            expected_checksum: None,
            model_version: "v1".to_string(),
        }
    }
}

/// Load and validate a classifier artifact from disk
pub fn load_classifier(path: &Path, config: &ArtifactConfig) -> Result<OnnxClassifier, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.len() > config.max_artifact_bytes {
        return Err(LoadError::TooLarge {
            size: bytes.len(),
            max: config.max_artifact_bytes,
        });
    }

    let checksum = compute_checksum(&bytes);
    if let Some(expected) = &config.expected_checksum {
        if !expected.eq_ignore_ascii_case(&checksum) {
            return Err(LoadError::ChecksumMismatch {
                expected: expected.clone(),
                actual: checksum,
            });
        }
    }

    let classifier = OnnxClassifier::from_bytes(&bytes, config.model_version.clone())?;

    info!(
        path = %path.display(),
        size = bytes.len(),
        checksum = %checksum,
        version = %config.model_version,
        "Loaded classifier artifact"
    );

    Ok(classifier)
}

/// Compute SHA256 checksum of data
fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_compute_checksum() {
        let checksum = compute_checksum(b"artifact bytes");
        assert_eq!(checksum.len(), 64); // SHA256 hex is 64 chars
    }

    #[test]
    fn test_checksum_consistency() {
        assert_eq!(
            compute_checksum(b"artifact bytes"),
            compute_checksum(b"artifact bytes")
        );
    }

    #[test]
    fn test_missing_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.onnx");
        let err = load_classifier(&path, &ArtifactConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_oversized_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.onnx");
        fs::write(&path, vec![0u8; 32]).unwrap();

        let config = ArtifactConfig {
            max_artifact_bytes: 16,
            ..Default::default()
        };
        let err = load_classifier(&path, &config).unwrap_err();
        assert!(matches!(err, LoadError::TooLarge { size: 32, max: 16 }));
    }

    #[test]
    fn test_checksum_mismatch() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.onnx");
        fs::write(&path, b"some model bytes").unwrap();

        let config = ArtifactConfig {
            expected_checksum: Some("0".repeat(64)),
            ..Default::default()
        };
        let err = load_classifier(&path, &config).unwrap_err();
        assert!(matches!(err, LoadError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_checksum_comparison_is_case_insensitive() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.onnx");
        fs::write(&path, b"some model bytes").unwrap();

        let expected = compute_checksum(b"some model bytes").to_uppercase();
        let config = ArtifactConfig {
            expected_checksum: Some(expected),
            ..Default::default()
        };
        // Checksum passes; the garbage graph then fails to parse.
        let err = load_classifier(&path, &config).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_corrupt_artifact() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.onnx");
        fs::write(&path, b"definitely not onnx").unwrap();

        let err = load_classifier(&path, &ArtifactConfig::default()).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
