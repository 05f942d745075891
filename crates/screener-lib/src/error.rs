//! Error types for the screening library

use std::path::PathBuf;

use thiserror::Error;

use crate::models::ClassLabel;
use crate::screen::Screen;

/// Errors produced by screen routing, vector assembly, model loading,
/// and inference dispatch.
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// A model artifact could not be read or parsed at startup
    #[error("failed to load artifact for screen '{screen}' from {path:?}")]
    ArtifactLoad {
        screen: Screen,
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The requested screen identifier does not exist
    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    /// The screen exists but no classifier is registered for it
    #[error("no classifier registered for screen '{0}'")]
    UnregisteredScreen(Screen),

    /// A required input field was not supplied
    #[error("screen '{screen}' is missing required field '{field}'")]
    MissingField { screen: Screen, field: String },

    /// An input field carried a value the vector cannot represent
    #[error("screen '{screen}' received an invalid value for field '{field}'")]
    InvalidFieldValue { screen: Screen, field: String },

    /// The feature vector length does not match the classifier input width
    #[error("classifier expects {expected} features, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// The underlying model invocation failed
    #[error("inference failed for screen '{screen}'")]
    Inference {
        screen: Screen,
        #[source]
        source: anyhow::Error,
    },

    /// The classifier emitted a class label outside the screen's label set
    #[error("screen '{screen}' produced unmapped class label {label}")]
    UnknownLabel { screen: Screen, label: ClassLabel },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_screen_and_field() {
        let err = ScreenerError::MissingField {
            screen: Screen::Diabetes,
            field: "Glucose".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("diabetes"));
        assert!(msg.contains("Glucose"));
    }

    #[test]
    fn test_arity_mismatch_display() {
        let err = ScreenerError::ArityMismatch { expected: 8, got: 7 };
        assert_eq!(err.to_string(), "classifier expects 8 features, got 7");
    }

    #[test]
    fn test_artifact_load_preserves_source() {
        let err = ScreenerError::ArtifactLoad {
            screen: Screen::HeartDisease,
            path: PathBuf::from("models/heart_disease.onnx"),
            source: anyhow::anyhow!("truncated file"),
        };
        let source = std::error::Error::source(&err).expect("source should be set");
        assert!(source.to_string().contains("truncated"));
    }
}
