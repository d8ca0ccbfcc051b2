//! Diagnosis records produced by a matching rule.

use crate::disease::Disease;
use serde::Serialize;

/// The result of one rule matching one patient.
///
/// Built fresh on every evaluation and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    disease: Disease,
    explanation: String,
    reported_symptoms: Vec<String>,
}

impl Diagnosis {
    pub fn new(disease: Disease, explanation: String, reported_symptoms: Vec<String>) -> Self {
        Self {
            disease,
            explanation,
            reported_symptoms,
        }
    }

    pub fn disease(&self) -> Disease {
        self.disease
    }

    pub fn disease_name(&self) -> &'static str {
        self.disease.name()
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Every symptom the patient reported, not only the ones the rule relied on.
    pub fn reported_symptoms(&self) -> &[String] {
        &self.reported_symptoms
    }
}
