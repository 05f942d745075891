//! Class-label to diagnosis-message mapping
//!
//! Each screen carries a static two-way rule: the classifier's small-integer
//! output selects one of two fixed messages. A label outside the documented
//! class set is rejected rather than silently mapped.

use crate::models::ClassLabel;
use serde::{Deserialize, Serialize};

/// Binary outcome of a screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Positive,
    Negative,
}

/// Static mapping from class labels to diagnosis messages for one screen
#[derive(Debug, Clone, Copy)]
pub struct LabelRule {
    /// Class labels the bound artifact is documented to emit
    pub classes: &'static [ClassLabel],
    /// The class that maps to the positive message
    pub positive_class: ClassLabel,
    pub positive: &'static str,
    pub negative: &'static str,
}

impl LabelRule {
    /// Map a class label to an outcome. Returns `None` for labels outside
    /// the documented class set.
    pub fn outcome(&self, label: ClassLabel) -> Option<Outcome> {
        if !self.classes.contains(&label) {
            return None;
        }
        if label == self.positive_class {
            Some(Outcome::Positive)
        } else {
            Some(Outcome::Negative)
        }
    }

    pub fn message(&self, outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::Positive => self.positive,
            Outcome::Negative => self.negative,
        }
    }
}

pub(super) const DIABETES_LABELS: LabelRule = LabelRule {
    classes: &[0, 1],
    positive_class: 1,
    positive: "The person is likely to have diabetes",
    negative: "The person is not likely to have diabetes",
};

pub(super) const HEART_DISEASE_LABELS: LabelRule = LabelRule {
    classes: &[0, 1],
    positive_class: 1,
    positive: "The person is likely to have heart disease",
    negative: "The person does not show signs of heart disease",
};

pub(super) const PARKINSONS_LABELS: LabelRule = LabelRule {
    classes: &[0, 1],
    positive_class: 1,
    positive: "The person is likely to have Parkinson's disease",
    negative: "The person does not show signs of Parkinson's disease",
};

/// Final-revision breast cancer artifact: classes {0, 1}, class 1 malignant.
pub(super) const BREAST_CANCER_LABELS: LabelRule = LabelRule {
    classes: &[0, 1],
    positive_class: 1,
    positive: "The tumor is likely malignant",
    negative: "The tumor is likely benign",
};

/// Earlier breast cancer artifact revision: classes {1, 2}, class 2 benign.
/// Selected per artifact version through configuration, never guessed.
pub const BREAST_CANCER_LEGACY_LABELS: LabelRule = LabelRule {
    classes: &[1, 2],
    positive_class: 1,
    positive: "The tumor is likely malignant",
    negative: "The tumor is likely benign",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_class_maps_to_positive() {
        assert_eq!(DIABETES_LABELS.outcome(1), Some(Outcome::Positive));
        assert_eq!(DIABETES_LABELS.outcome(0), Some(Outcome::Negative));
    }

    #[test]
    fn test_out_of_set_label_rejected() {
        assert_eq!(DIABETES_LABELS.outcome(2), None);
        assert_eq!(DIABETES_LABELS.outcome(-1), None);
    }

    #[test]
    fn test_breast_cancer_final_convention() {
        // Class 1 leans malignant, class 0 benign
        assert_eq!(BREAST_CANCER_LABELS.outcome(1), Some(Outcome::Positive));
        assert_eq!(BREAST_CANCER_LABELS.outcome(0), Some(Outcome::Negative));
        assert_eq!(
            BREAST_CANCER_LABELS.message(Outcome::Positive),
            "The tumor is likely malignant"
        );
    }

    #[test]
    fn test_breast_cancer_legacy_convention() {
        // Legacy artifact emits {1, 2} with 2 meaning benign
        assert_eq!(BREAST_CANCER_LEGACY_LABELS.outcome(2), Some(Outcome::Negative));
        assert_eq!(BREAST_CANCER_LEGACY_LABELS.outcome(1), Some(Outcome::Positive));
        assert_eq!(BREAST_CANCER_LEGACY_LABELS.outcome(0), None);
    }

    #[test]
    fn test_formatting_is_pure() {
        // Same inputs always produce the same message
        for _ in 0..3 {
            let outcome = HEART_DISEASE_LABELS.outcome(1).unwrap();
            assert_eq!(
                HEART_DISEASE_LABELS.message(outcome),
                "The person is likely to have heart disease"
            );
        }
    }
}
