//! Combined assessment service.
//!
//! This module ties the diagnostic and recommendation engines together so that a caller gets
//! every output for a patient from a single evaluation.

use crate::diagnosis::Diagnosis;
use crate::disease::Disease;
use crate::engine::DiagnosticEngine;
use crate::patient::Patient;
use crate::recommendations::{Exam, RecommendationEngine, Treatment};
use crate::severity::Severity;
use serde::Serialize;

/// Everything the engines derive for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Identifier of the assessed patient.
    pub patient_id: String,
    /// Matched diagnoses in rule-registration order.
    pub diagnoses: Vec<Diagnosis>,
    /// Severity classification.
    pub severity: Severity,
    /// Recommended exams, deduplicated.
    pub exams: Vec<Exam>,
    /// Suggested treatments, deduplicated.
    pub treatments: Vec<Treatment>,
}

impl Assessment {
    /// Returns the diagnosis for `disease`, if it was made.
    pub fn diagnosis(&self, disease: Disease) -> Option<&Diagnosis> {
        self.diagnoses.iter().find(|d| d.disease() == disease)
    }

    /// Returns `true` when no rule matched.
    pub fn is_inconclusive(&self) -> bool {
        self.diagnoses.is_empty()
    }
}

/// Pure diagnostic operations - no I/O concerns
#[derive(Default)]
pub struct DiagnosticService {
    engine: DiagnosticEngine,
    recommender: RecommendationEngine,
}

impl DiagnosticService {
    /// Creates a service over the built-in rules.
    pub fn new() -> Self {
        Self::with_engine(DiagnosticEngine::new())
    }

    pub fn with_engine(engine: DiagnosticEngine) -> Self {
        Self {
            engine,
            recommender: RecommendationEngine::new(),
        }
    }

    pub fn engine(&self) -> &DiagnosticEngine {
        &self.engine
    }

    /// Evaluates the patient once and derives severity and recommendations from that result.
    pub fn assess(&self, patient: &Patient) -> Assessment {
        let diagnoses = self.engine.evaluate(patient);
        let severity = self.engine.classify(patient, &diagnoses);
        let exams = self.recommender.recommend_exams(patient, &diagnoses);
        let treatments = self
            .recommender
            .recommend_treatments(patient, &diagnoses, severity);

        tracing::debug!(
            patient = patient.id(),
            severity = %severity,
            diagnoses = diagnoses.len(),
            "assessment complete"
        );

        Assessment {
            patient_id: patient.id().to_string(),
            diagnoses,
            severity,
            exams,
            treatments,
        }
    }

    /// Returns the diagnosis for `disease` if its rule matches the patient.
    pub fn explain(&self, patient: &Patient, disease: Disease) -> Option<Diagnosis> {
        self.engine.explain(patient, disease)
    }
}
