//! Per-screen input schemas
//!
//! Each screen declares an ordered list of named numeric fields. The declared
//! order is the contract with the bound classifier, which knows positions
//! only, not names. Ranges are advisory display metadata; the builder never
//! rejects a value for being outside them.

use serde::{Deserialize, Serialize};

/// Numeric kind of a field, used by input layers for widget selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Integer,
    Float,
}

/// One named field of a screen's input schema
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Inclusive lower bound, advisory only
    pub min: f64,
    /// Inclusive upper bound, advisory only
    pub max: f64,
    pub prompt: &'static str,
}

impl FieldSpec {
    /// Whether a value falls inside the documented range. Callers may warn on
    /// out-of-range input but must not reject it.
    pub fn in_range(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

macro_rules! field {
    ($name:literal, $kind:ident, $min:expr, $max:expr, $prompt:literal) => {
        FieldSpec {
            name: $name,
            kind: FieldKind::$kind,
            min: $min,
            max: $max,
            prompt: $prompt,
        }
    };
}

pub(super) const DIABETES_FIELDS: &[FieldSpec] = &[
    field!("Pregnancies", Integer, 0.0, 17.0, "Number of pregnancies"),
    field!("Glucose", Integer, 0.0, 199.0, "Glucose level"),
    field!("BloodPressure", Integer, 0.0, 122.0, "Blood pressure value"),
    field!("SkinThickness", Integer, 0.0, 99.0, "Skin thickness value"),
    field!("Insulin", Integer, 0.0, 846.0, "Insulin level"),
    field!("BMI", Float, 0.0, 67.1, "BMI value"),
    field!("DiabetesPedigreeFunction", Float, 0.08, 2.42, "Diabetes pedigree function value"),
    field!("Age", Integer, 20.0, 90.0, "Age of the person"),
];

pub(super) const HEART_DISEASE_FIELDS: &[FieldSpec] = &[
    field!("age", Integer, 29.0, 77.0, "Age"),
    field!("sex", Integer, 0.0, 1.0, "Sex (1 = male, 0 = female)"),
    field!("cp", Integer, 0.0, 3.0, "Chest pain type"),
    field!("trestbps", Integer, 94.0, 200.0, "Resting blood pressure"),
    field!("chol", Integer, 126.0, 564.0, "Serum cholesterol in mg/dl"),
    field!("fbs", Integer, 0.0, 1.0, "Fasting blood sugar > 120 mg/dl (1 = true, 0 = false)"),
    field!("restecg", Integer, 0.0, 2.0, "Resting electrocardiographic results"),
    field!("thalach", Integer, 71.0, 202.0, "Maximum heart rate achieved"),
    field!("exang", Integer, 0.0, 1.0, "Exercise induced angina (1 = yes, 0 = no)"),
    field!("oldpeak", Float, 0.0, 6.2, "ST depression induced by exercise"),
    field!("slope", Integer, 0.0, 2.0, "Slope of the peak exercise ST segment"),
    field!("ca", Integer, 0.0, 4.0, "Major vessels colored by fluoroscopy"),
    field!("thal", Integer, 0.0, 3.0, "Thal (0 = normal, 1 = fixed defect, 2 = reversible defect)"),
];

pub(super) const PARKINSONS_FIELDS: &[FieldSpec] = &[
    field!("fo", Float, 88.0, 260.0, "MDVP:Fo(Hz)"),
    field!("fhi", Float, 102.0, 592.0, "MDVP:Fhi(Hz)"),
    field!("flo", Float, 65.0, 240.0, "MDVP:Flo(Hz)"),
    field!("Jitter%", Float, 0.001, 0.034, "MDVP:Jitter(%)"),
    field!("Jitter(Abs)", Float, 0.000007, 0.00026, "MDVP:Jitter(Abs)"),
    field!("RAP", Float, 0.0006, 0.0215, "MDVP:RAP"),
    field!("PPQ", Float, 0.0009, 0.0196, "MDVP:PPQ"),
    field!("DDP", Float, 0.002, 0.0644, "Jitter:DDP"),
    field!("Shimmer", Float, 0.0095, 0.1191, "MDVP:Shimmer"),
    field!("Shimmer(dB)", Float, 0.085, 1.302, "MDVP:Shimmer(dB)"),
    field!("APQ3", Float, 0.0045, 0.0565, "Shimmer:APQ3"),
    field!("APQ5", Float, 0.0057, 0.0794, "Shimmer:APQ5"),
    field!("APQ", Float, 0.0072, 0.1378, "MDVP:APQ"),
    field!("DDA", Float, 0.0136, 0.1694, "Shimmer:DDA"),
    field!("NHR", Float, 0.00065, 0.3148, "NHR"),
    field!("HNR", Float, 8.44, 33.05, "HNR"),
    field!("RPDE", Float, 0.2566, 0.6852, "RPDE"),
    field!("DFA", Float, 0.5743, 0.8253, "DFA"),
    field!("spread1", Float, -7.965, -2.434, "spread1"),
    field!("spread2", Float, 0.0063, 0.4506, "spread2"),
    field!("D2", Float, 1.4233, 3.6712, "D2"),
    field!("PPE", Float, 0.0445, 0.5274, "PPE"),
];

pub(super) const BREAST_CANCER_FIELDS: &[FieldSpec] = &[
    field!("clump_thickness", Integer, 1.0, 10.0, "Clump thickness"),
    field!("uniform_cell_size", Integer, 1.0, 10.0, "Uniformity of cell size"),
    field!("uniform_cell_shape", Integer, 1.0, 10.0, "Uniformity of cell shape"),
    field!("marginal_adhesion", Integer, 1.0, 10.0, "Marginal adhesion"),
    field!("single_epithelial_size", Integer, 1.0, 10.0, "Single epithelial cell size"),
    field!("bare_nuclei", Integer, 1.0, 10.0, "Bare nuclei"),
    field!("bland_chromatin", Integer, 1.0, 10.0, "Bland chromatin"),
    field!("normal_nucleoli", Integer, 1.0, 10.0, "Normal nucleoli"),
    field!("mitoses", Integer, 1.0, 10.0, "Mitoses"),
];
