//! Screen routing and descriptors
//!
//! A screen is one of the four disease-prediction forms. Selection is an
//! exhaustive enum rather than string comparison, so the mapping from screen
//! to {schema, classifier arity, label rule} is checked at compile time.

mod labels;
mod schema;

pub use labels::{LabelRule, Outcome, BREAST_CANCER_LEGACY_LABELS};
pub use schema::{FieldKind, FieldSpec};

use crate::error::ScreenerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four disease-prediction screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Diabetes,
    HeartDisease,
    Parkinsons,
    BreastCancer,
}

impl Screen {
    /// All screens, in registration order. The first entry is the default.
    pub const ALL: [Screen; 4] = [
        Screen::Diabetes,
        Screen::HeartDisease,
        Screen::Parkinsons,
        Screen::BreastCancer,
    ];

    /// Stable identifier used in URLs, configuration and logs
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Diabetes => "diabetes",
            Screen::HeartDisease => "heart-disease",
            Screen::Parkinsons => "parkinsons",
            Screen::BreastCancer => "breast-cancer",
        }
    }

    /// The screen shown when no selection has been made yet
    pub fn default_screen() -> Screen {
        Screen::ALL[0]
    }

    /// Static descriptor for this screen
    pub fn descriptor(&self) -> &'static ScreenDescriptor {
        match self {
            Screen::Diabetes => &DIABETES,
            Screen::HeartDisease => &HEART_DISEASE,
            Screen::Parkinsons => &PARKINSONS,
            Screen::BreastCancer => &BREAST_CANCER,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = ScreenerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.id() == s)
            .ok_or_else(|| ScreenerError::UnknownScreen(s.to_string()))
    }
}

/// Static configuration of one screen: title, versioned field order and
/// label-formatting rule. Constructed at compile time, never mutated.
#[derive(Debug)]
pub struct ScreenDescriptor {
    pub screen: Screen,
    pub title: &'static str,
    /// Versioned name of the field order; must move in lockstep with the
    /// bound artifact, which addresses features by position only.
    pub schema_version: &'static str,
    pub fields: &'static [FieldSpec],
    pub labels: LabelRule,
}

impl ScreenDescriptor {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Resolve a user selection string to its screen descriptor.
/// Exactly one screen is active per interaction cycle; an unknown selection
/// fails without any partial state change.
pub fn activate(selection: &str) -> Result<&'static ScreenDescriptor, ScreenerError> {
    let screen: Screen = selection.parse()?;
    Ok(screen.descriptor())
}

static DIABETES: ScreenDescriptor = ScreenDescriptor {
    screen: Screen::Diabetes,
    title: "Diabetes Prediction",
    schema_version: "diabetes/v1",
    fields: schema::DIABETES_FIELDS,
    labels: labels::DIABETES_LABELS,
};

static HEART_DISEASE: ScreenDescriptor = ScreenDescriptor {
    screen: Screen::HeartDisease,
    title: "Heart Disease Prediction",
    schema_version: "heart-disease/v1",
    fields: schema::HEART_DISEASE_FIELDS,
    labels: labels::HEART_DISEASE_LABELS,
};

static PARKINSONS: ScreenDescriptor = ScreenDescriptor {
    screen: Screen::Parkinsons,
    title: "Parkinson's Disease Prediction",
    schema_version: "parkinsons/v1",
    fields: schema::PARKINSONS_FIELDS,
    labels: labels::PARKINSONS_LABELS,
};

static BREAST_CANCER: ScreenDescriptor = ScreenDescriptor {
    screen: Screen::BreastCancer,
    title: "Breast Cancer Prediction",
    schema_version: "breast-cancer/v1",
    fields: schema::BREAST_CANCER_FIELDS,
    labels: labels::BREAST_CANCER_LABELS,
};
