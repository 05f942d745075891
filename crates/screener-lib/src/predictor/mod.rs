//! Classifier invocation
//!
//! A classifier is an opaque, externally trained artifact consumed through a
//! single deterministic inference call. Handles are immutable after loading
//! and shared read-only across sessions.

mod onnx;
mod registry;

pub use onnx::OnnxClassifier;
pub use registry::{ModelRegistry, ModelRegistryBuilder};

use crate::error::ScreenerError;
use crate::models::{ClassLabel, FeatureVector};

/// Trait for pre-trained binary classifiers
pub trait Classifier: Send + Sync {
    /// Number of input features the artifact was trained on
    fn arity(&self) -> usize;

    /// Run one inference on a single-row batch. Deterministic: the same
    /// vector always yields the same label for a fixed artifact.
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, ScreenerError>;
}

impl std::fmt::Debug for dyn Classifier + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("arity", &self.arity())
            .finish()
    }
}

/// Reject a vector whose length does not match the classifier's arity
/// before the underlying call sees it.
pub(crate) fn check_arity(expected: usize, got: usize) -> Result<(), ScreenerError> {
    if expected != got {
        return Err(ScreenerError::ArityMismatch { expected, got });
    }
    Ok(())
}
