//! Screening library for the clinical prediction service
//!
//! This crate provides the core functionality for:
//! - Screen routing and per-screen input schemas
//! - Feature vector assembly
//! - Classifier loading and inference dispatch
//! - Label formatting
//! - Health checks and observability

pub mod engine;
pub mod error;
pub mod health;
pub mod models;
pub mod observability;
pub mod predictor;
pub mod screen;
pub mod vector;

pub use engine::ScreeningEngine;
pub use error::ScreenerError;
pub use health::{
    ComponentHealth, ComponentStatus, HealthRegistry, HealthResponse, ReadinessResponse,
};
pub use models::*;
pub use observability::{ScreenerMetrics, StructuredLogger};
pub use predictor::{Classifier, ModelRegistry, ModelRegistryBuilder, OnnxClassifier};
pub use screen::{
    activate, FieldKind, FieldSpec, LabelRule, Outcome, Screen, ScreenDescriptor,
    BREAST_CANCER_LEGACY_LABELS,
};
