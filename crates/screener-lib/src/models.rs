//! Core data models for the screening service

use crate::screen::{Outcome, Screen};
use serde::{Deserialize, Serialize};

/// Small-integer class emitted by a classifier for one inference
pub type ClassLabel = i64;

/// Fixed-order numeric vector passed to a classifier for one inference
///
/// The order of `values` matches the declared field order of the schema
/// version it was built under. Constructed fresh per prediction request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub schema_version: String,
    pub values: Vec<f32>,
}

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Human-readable result of one screening cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnosis {
    pub screen: Screen,
    pub outcome: Outcome,
    pub message: String,
    pub class_label: ClassLabel,
    pub schema_version: String,
    pub generated_at: i64,
}
