//! Service configuration

use anyhow::Result;
use screener_lib::Screen;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Screening service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// API server port for predictions and health/metrics
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Directory holding the pre-trained model artifacts
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// Artifact file name per screen, relative to `model_dir`
    #[serde(default = "default_diabetes_artifact")]
    pub diabetes_artifact: String,

    #[serde(default = "default_heart_disease_artifact")]
    pub heart_disease_artifact: String,

    #[serde(default = "default_parkinsons_artifact")]
    pub parkinsons_artifact: String,

    #[serde(default = "default_breast_cancer_artifact")]
    pub breast_cancer_artifact: String,

    /// Set when the deployed breast cancer artifact is the earlier revision
    /// that emits classes {1, 2} with 2 meaning benign
    #[serde(default)]
    pub legacy_breast_cancer_labels: bool,
}

fn default_api_port() -> u16 {
    8080
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("models")
}

fn default_diabetes_artifact() -> String {
    "diabetes.onnx".to_string()
}

fn default_heart_disease_artifact() -> String {
    "heart_disease.onnx".to_string()
}

fn default_parkinsons_artifact() -> String {
    "parkinsons.onnx".to_string()
}

fn default_breast_cancer_artifact() -> String {
    "breast_cancer.onnx".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            model_dir: default_model_dir(),
            diabetes_artifact: default_diabetes_artifact(),
            heart_disease_artifact: default_heart_disease_artifact(),
            parkinsons_artifact: default_parkinsons_artifact(),
            breast_cancer_artifact: default_breast_cancer_artifact(),
            legacy_breast_cancer_labels: false,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from the environment
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("SCREENER"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_default())
    }

    /// Absolute artifact path per screen
    pub fn artifact_paths(&self) -> HashMap<Screen, PathBuf> {
        let file = |name: &str| self.model_dir.join(name);
        HashMap::from([
            (Screen::Diabetes, file(&self.diabetes_artifact)),
            (Screen::HeartDisease, file(&self.heart_disease_artifact)),
            (Screen::Parkinsons, file(&self.parkinsons_artifact)),
            (Screen::BreastCancer, file(&self.breast_cancer_artifact)),
        ])
    }
}
