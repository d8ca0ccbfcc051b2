//! Plain-text report composition.
//!
//! Each view borrows the core outputs and renders through [`std::fmt::Display`], so callers can
//! print directly or collect into a `String`.

use dxr_core::{Assessment, Diagnosis, DiagnosticEngine, Disease, Patient};
use std::fmt;

const CLOSING_RULE_WIDTH: usize = 50;

/// Full report block for one patient.
pub struct Report<'a> {
    patient: &'a Patient,
    assessment: &'a Assessment,
}

impl<'a> Report<'a> {
    pub fn new(patient: &'a Patient, assessment: &'a Assessment) -> Self {
        Self {
            patient,
            assessment,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patient = self.patient;
        let assessment = self.assessment;

        writeln!(f, "=== DIAGNOSIS FOR {} ===", patient.id())?;
        writeln!(f)?;

        writeln!(f, "REPORTED SYMPTOMS:")?;
        for symptom in patient.symptoms() {
            writeln!(f, "  - {symptom}")?;
        }

        writeln!(f)?;
        writeln!(f, "DURATION: {} days", patient.duration_days())?;

        if patient.has_risk_factors() {
            writeln!(f)?;
            writeln!(f, "RISK FACTORS:")?;
            for factor in patient.risk_factors() {
                writeln!(f, "  - {factor}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "POSSIBLE DISEASES:")?;
        if assessment.is_inconclusive() {
            writeln!(f, "  Cannot be determined from current symptoms")?;
        } else {
            for diagnosis in &assessment.diagnoses {
                writeln!(f, "  * {}", diagnosis.disease())?;
            }
        }

        writeln!(f)?;
        writeln!(f, "SEVERITY: {}", assessment.severity)?;

        writeln!(f)?;
        writeln!(f, "RECOMMENDED EXAMS:")?;
        if assessment.exams.is_empty() {
            writeln!(f, "  None specific at this time")?;
        } else {
            for exam in &assessment.exams {
                writeln!(f, "  - {exam}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "SUGGESTED TREATMENTS:")?;
        if assessment.treatments.is_empty() {
            writeln!(f, "  Consult a physician")?;
        } else {
            for treatment in &assessment.treatments {
                writeln!(f, "  - {treatment}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", "=".repeat(CLOSING_RULE_WIDTH))?;
        writeln!(f)
    }
}

/// Why a disease was diagnosed, or a note that it was not.
pub struct ExplanationView<'a> {
    disease: Disease,
    diagnosis: Option<&'a Diagnosis>,
}

impl<'a> ExplanationView<'a> {
    pub fn new(disease: Disease, diagnosis: Option<&'a Diagnosis>) -> Self {
        Self { disease, diagnosis }
    }
}

impl fmt::Display for ExplanationView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.diagnosis {
            Some(diagnosis) => {
                writeln!(f, "EXPLANATION: Why was {} diagnosed?", self.disease)?;
                writeln!(f)?;
                writeln!(f, "{}", diagnosis.explanation())
            }
            None => writeln!(f, "{} was not diagnosed for this patient.", self.disease),
        }
    }
}

/// Registered rules with their criteria.
pub struct RuleTable<'a> {
    engine: &'a DiagnosticEngine,
}

impl<'a> RuleTable<'a> {
    pub fn new(engine: &'a DiagnosticEngine) -> Self {
        Self { engine }
    }
}

impl fmt::Display for RuleTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, rule) in self.engine.rules().iter().enumerate() {
            let disease = rule.disease();
            writeln!(
                f,
                "{}. {} ({})",
                index + 1,
                disease.name(),
                disease.slug()
            )?;
            writeln!(f, "   {}", rule.criteria())?;
        }
        Ok(())
    }
}
