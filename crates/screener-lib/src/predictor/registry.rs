//! Model registry
//!
//! Loads every screen's artifact once at startup and resolves screens to
//! classifier handles afterwards. The registry is read-only after `load`;
//! no locking is needed to share it across sessions.

use super::{Classifier, OnnxClassifier};
use crate::error::ScreenerError;
use crate::screen::Screen;
use anyhow::Context;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Immutable set of classifier handles, one per registered screen
pub struct ModelRegistry {
    classifiers: HashMap<Screen, Box<dyn Classifier>>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("classifiers", &self.classifiers.keys())
            .finish()
    }
}

impl ModelRegistry {
    pub fn builder() -> ModelRegistryBuilder {
        ModelRegistryBuilder::default()
    }

    /// Load every screen's ONNX artifact from the given paths.
    ///
    /// Fails with `ArtifactLoad` if any screen has no configured path, the
    /// file cannot be read, or the artifact does not parse. Each artifact's
    /// arity is pinned to its screen's declared field count, so a schema and
    /// artifact that disagree are rejected here instead of at request time.
    pub fn load(paths: &HashMap<Screen, PathBuf>) -> Result<Self, ScreenerError> {
        let mut builder = Self::builder();

        for screen in Screen::ALL {
            let path = paths
                .get(&screen)
                .ok_or_else(|| ScreenerError::ArtifactLoad {
                    screen,
                    path: PathBuf::new(),
                    source: anyhow::anyhow!("no artifact path configured"),
                })?;
            let classifier = load_artifact(screen, path)?;
            builder = builder.register(screen, Box::new(classifier));
        }

        Ok(builder.build())
    }

    /// Resolve a screen to its classifier handle.
    pub fn resolve(&self, screen: Screen) -> Result<&dyn Classifier, ScreenerError> {
        self.classifiers
            .get(&screen)
            .map(|c| c.as_ref())
            .ok_or(ScreenerError::UnregisteredScreen(screen))
    }

    /// Screens that currently have a classifier
    pub fn registered(&self) -> Vec<Screen> {
        Screen::ALL
            .into_iter()
            .filter(|s| self.classifiers.contains_key(s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.classifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classifiers.is_empty()
    }
}

fn load_artifact(screen: Screen, path: &Path) -> Result<OnnxClassifier, ScreenerError> {
    let descriptor = screen.descriptor();

    let wrap = |source: anyhow::Error| ScreenerError::ArtifactLoad {
        screen,
        path: path.to_path_buf(),
        source,
    };

    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read artifact file {:?}", path))
        .map_err(wrap)?;

    let classifier =
        OnnxClassifier::from_bytes(screen, &bytes, descriptor.field_count()).map_err(wrap)?;

    info!(
        screen = %screen,
        path = %path.display(),
        size = bytes.len(),
        checksum = %compute_checksum(&bytes),
        schema_version = descriptor.schema_version,
        "Loaded model artifact"
    );

    Ok(classifier)
}

/// SHA256 checksum of artifact bytes, logged for traceability
fn compute_checksum(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Builder used at startup and by tests to assemble a registry
#[derive(Default)]
pub struct ModelRegistryBuilder {
    classifiers: HashMap<Screen, Box<dyn Classifier>>,
}

impl ModelRegistryBuilder {
    pub fn register(mut self, screen: Screen, classifier: Box<dyn Classifier>) -> Self {
        self.classifiers.insert(screen, classifier);
        self
    }

    pub fn build(self) -> ModelRegistry {
        ModelRegistry {
            classifiers: self.classifiers,
        }
    }
}
